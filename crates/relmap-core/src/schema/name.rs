use std_util::str;

/// An identifier split into lower-case words.
///
/// Raw schema names come in any style (`order_line`, `OrderLine`,
/// `orderLine`); storing the words lets callers render whichever case the
/// target needs.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = str::snake_case(src);
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn camel_case(&self) -> String {
        str::camel_case(&self.snake_case())
    }

    pub fn upper_camel_case(&self) -> String {
        str::upper_camel_case(&self.snake_case())
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    pub fn upper_snake_case(&self) -> String {
        str::upper_snake_case(&self.snake_case())
    }

    /// Same name with the last word singularized.
    pub fn singular(&self) -> Name {
        Name::new(&str::singularize(&self.snake_case()))
    }

    /// This name followed by the words of `other`.
    pub fn join(&self, other: &Name) -> Name {
        let mut parts = self.parts.clone();
        parts.extend(other.parts.iter().cloned());
        Name { parts }
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.upper_camel_case())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_any_case() {
        assert_eq!(Name::new("order_line").parts, ["order", "line"]);
        assert_eq!(Name::new("OrderLine").parts, ["order", "line"]);
        assert_eq!(Name::new("orderLine").parts, ["order", "line"]);
    }

    #[test]
    fn renders_cases() {
        let name = Name::new("from_address");
        assert_eq!(name.camel_case(), "fromAddress");
        assert_eq!(name.upper_camel_case(), "FromAddress");
        assert_eq!(name.upper_snake_case(), "FROM_ADDRESS");
    }

    #[test]
    fn singular_and_join() {
        assert_eq!(Name::new("order_lines").singular().snake_case(), "order_line");
        let joined = Name::new("from_address").join(&Name::new("Shipment"));
        assert_eq!(joined.camel_case(), "fromAddressShipment");
    }
}
