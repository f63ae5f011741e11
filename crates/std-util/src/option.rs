/// Asserts the expression is `None`, printing the unexpected value otherwise.
#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        match &$e {
            None => {}
            actual => panic!("expected `None`; actual={:?}", actual),
        }
    };
}

/// Unwraps a `Some`, panicking with the expression text on `None`.
#[macro_export]
macro_rules! assert_some {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => panic!("expected `Some`; `{}` was `None`", stringify!($e)),
        }
    };
}
