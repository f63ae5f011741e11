//! Relation and table directives embedded in schema comments.
//!
//! A directive is written as `{d:key}value{/d:key}` anywhere in a comment.
//! Directives are parsed once, while the schema graph is built, into the
//! typed records below. Values that are not understood are dropped and
//! reported as recoverable [`Error::invalid_directive`] diagnostics.

use crate::Error;

use serde::Serialize;

/// Options attached to a foreign key through its comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    /// Suppress the inverse side of the relation.
    pub unidirectional: bool,

    pub cascade: Option<Cascade>,

    pub fetch: Option<Fetch>,

    pub orphan_removal: Option<bool>,

    /// Explicit relation name, used to disambiguate relations between the
    /// same pair of tables.
    pub name: Option<String>,

    /// Marks the owning side of a many-to-many relation. Only meaningful on
    /// foreign keys of junction tables.
    pub owning_side: bool,
}

/// Options attached to a table through its comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDirectives {
    /// Generate no entity for the table.
    pub skip: bool,

    /// Overrides junction table detection when set.
    pub many_to_many: Option<bool>,
}

/// Operations cascaded across an association.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cascade {
    ops: Vec<CascadeOp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CascadeOp {
    All,
    Persist,
    Remove,
    Merge,
    Detach,
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fetch {
    Lazy,
    Eager,
    ExtraLazy,
}

/// Referential action taken when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeleteRule {
    Cascade,
    SetNull,
    Restrict,
    NoAction,
}

/// A comment split into its descriptive text and its directives.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Comment {
    pub(crate) text: Option<String>,
    pub(crate) directives: Vec<(String, String)>,
}

/// Reports unrecognized directive values for one schema element.
pub(crate) struct Reporter<'a> {
    subject: String,
    diagnostics: &'a mut Vec<Error>,
}

impl Directives {
    pub(crate) fn parse(directives: &[(String, String)], reporter: &mut Reporter<'_>) -> Self {
        let mut ret = Self::default();

        for (key, value) in directives {
            match key.as_str() {
                "unidirectional" => {
                    ret.unidirectional = reporter.bool(key, value).unwrap_or(false);
                }
                "cascade" => ret.cascade = Cascade::parse(value, reporter),
                "fetch" => {
                    ret.fetch = Fetch::parse(value);
                    if ret.fetch.is_none() {
                        reporter.report(key, value);
                    }
                }
                "orphanRemoval" => ret.orphan_removal = reporter.bool(key, value),
                "name" => {
                    ret.name = Some(value.clone()).filter(|name| !name.is_empty());
                }
                "owningSide" => {
                    ret.owning_side = reporter.bool(key, value).unwrap_or(false);
                }
                _ => {
                    tracing::debug!(subject = %reporter.subject, directive = %key, "ignoring unknown directive");
                }
            }
        }

        ret
    }
}

impl TableDirectives {
    pub(crate) fn parse(directives: &[(String, String)], reporter: &mut Reporter<'_>) -> Self {
        let mut ret = Self::default();

        for (key, value) in directives {
            match key.as_str() {
                "skip" => ret.skip = reporter.bool(key, value).unwrap_or(false),
                "m2m" => ret.many_to_many = reporter.bool(key, value),
                _ => {
                    tracing::debug!(subject = %reporter.subject, directive = %key, "ignoring unknown directive");
                }
            }
        }

        ret
    }
}

impl Cascade {
    pub fn new(ops: impl IntoIterator<Item = CascadeOp>) -> Self {
        let mut ret = Self::default();
        for op in ops {
            ret.push(op);
        }
        ret
    }

    pub fn ops(&self) -> &[CascadeOp] {
        &self.ops
    }

    pub fn is_all(&self) -> bool {
        self.ops.contains(&CascadeOp::All)
    }

    /// Parses a comma separated keyword list. Unknown keywords are reported
    /// and skipped; an empty result is `None`.
    fn parse(value: &str, reporter: &mut Reporter<'_>) -> Option<Self> {
        let mut ret = Self::default();

        for keyword in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match CascadeOp::parse(keyword) {
                Some(op) => ret.push(op),
                None => reporter.report("cascade", keyword),
            }
        }

        if ret.ops.is_empty() {
            None
        } else {
            Some(ret)
        }
    }

    fn push(&mut self, op: CascadeOp) {
        if !self.ops.contains(&op) {
            self.ops.push(op);
        }
    }
}

impl CascadeOp {
    pub fn parse(keyword: &str) -> Option<Self> {
        Some(match keyword.to_ascii_lowercase().as_str() {
            "all" => Self::All,
            "persist" => Self::Persist,
            "remove" => Self::Remove,
            "merge" => Self::Merge,
            "detach" => Self::Detach,
            "refresh" => Self::Refresh,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Persist => "persist",
            Self::Remove => "remove",
            Self::Merge => "merge",
            Self::Detach => "detach",
            Self::Refresh => "refresh",
        }
    }
}

impl Fetch {
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "LAZY" => Self::Lazy,
            "EAGER" => Self::Eager,
            "EXTRA_LAZY" => Self::ExtraLazy,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lazy => "LAZY",
            Self::Eager => "EAGER",
            Self::ExtraLazy => "EXTRA_LAZY",
        }
    }
}

impl DeleteRule {
    /// Parses a schema-level rule such as `SET NULL` or `no_action`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value
            .trim()
            .to_ascii_uppercase()
            .replace(['_', '-'], " ");

        Some(match normalized.split_whitespace().collect::<Vec<_>>()[..] {
            ["CASCADE"] => Self::Cascade,
            ["SET", "NULL"] => Self::SetNull,
            ["RESTRICT"] => Self::Restrict,
            ["NO", "ACTION"] => Self::NoAction,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::Restrict => "RESTRICT",
            Self::NoAction => "NO ACTION",
        }
    }
}

impl Comment {
    pub(crate) fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let mut text = String::new();
        let mut directives = vec![];
        let mut rest = raw;

        while let Some(start) = rest.find("{d:") {
            let after = &rest[start + 3..];
            let Some(key_end) = after.find('}') else {
                break;
            };
            let key = &after[..key_end];
            let close = format!("{{/d:{key}}}");
            let body = &after[key_end + 1..];
            let Some(value_end) = body.find(&close) else {
                break;
            };

            text.push_str(&rest[..start]);
            directives.push((key.trim().to_string(), body[..value_end].trim().to_string()));
            rest = &body[value_end + close.len()..];
        }

        text.push_str(rest);
        let text = text.trim();

        Self {
            text: (!text.is_empty()).then(|| text.to_string()),
            directives,
        }
    }
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(subject: String, diagnostics: &'a mut Vec<Error>) -> Self {
        Self {
            subject,
            diagnostics,
        }
    }

    pub(crate) fn report(&mut self, directive: &str, value: &str) {
        let err = Error::invalid_directive(self.subject.clone(), directive, value);
        tracing::warn!("{err}");
        self.diagnostics.push(err);
    }

    fn bool(&mut self, directive: &str, value: &str) -> Option<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => {
                self.report(directive, value);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_without_directives() {
        let comment = Comment::parse(Some("  the author  "));
        assert_eq!(comment.text.as_deref(), Some("the author"));
        assert!(comment.directives.is_empty());
    }

    #[test]
    fn comment_directives_are_stripped() {
        let comment = Comment::parse(Some(
            "Written by {d:cascade}persist, remove{/d:cascade} someone{d:unidirectional}true{/d:unidirectional}",
        ));
        assert_eq!(comment.text.as_deref(), Some("Written by  someone"));
        assert_eq!(
            comment.directives,
            [
                ("cascade".to_string(), "persist, remove".to_string()),
                ("unidirectional".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn unterminated_directive_stays_in_text() {
        let comment = Comment::parse(Some("{d:fetch}LAZY"));
        assert_eq!(comment.text.as_deref(), Some("{d:fetch}LAZY"));
        assert!(comment.directives.is_empty());
    }

    #[test]
    fn directive_only_comment_has_no_text() {
        let comment = Comment::parse(Some("{d:m2m}false{/d:m2m}"));
        assert_eq!(comment.text, None);
    }

    #[test]
    fn delete_rule_spellings() {
        assert_eq!(DeleteRule::parse("SET NULL"), Some(DeleteRule::SetNull));
        assert_eq!(DeleteRule::parse("set_null"), Some(DeleteRule::SetNull));
        assert_eq!(DeleteRule::parse("no action"), Some(DeleteRule::NoAction));
        assert_eq!(DeleteRule::parse("cascade"), Some(DeleteRule::Cascade));
        assert_eq!(DeleteRule::parse("explode"), None);
    }

    #[test]
    fn fetch_spellings() {
        assert_eq!(Fetch::parse("lazy"), Some(Fetch::Lazy));
        assert_eq!(Fetch::parse("extra-lazy"), Some(Fetch::ExtraLazy));
        assert_eq!(Fetch::parse("EXTRA_LAZY"), Some(Fetch::ExtraLazy));
        assert_eq!(Fetch::parse("sometimes"), None);
    }
}
