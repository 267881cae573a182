//! Rule tag tokenizer
//!
//! A rule tag is a flat list of whitespace separated tokens, each either
//! `name` or `name:argument`. Parsing here is purely syntactic; bounds are
//! interpreted later by the validator that consumes them.

/// Tag value that exempts a field from every check
pub const SKIP_MARKER: &str = "-";

/// Tag key used when the caller does not configure one
pub const DEFAULT_TAG_NAME: &str = "validation";

/// Suffix appended to the rule tag key to find the pattern tag
pub const PATTERN_TAG_SUFFIX: &str = "_regexp";

/// Key of the pattern tag companion to `tag_name`
pub fn pattern_tag_name(tag_name: &str) -> String {
    format!("{}{}", tag_name, PATTERN_TAG_SUFFIX)
}

/// One `name[:argument]` token of a rule tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleToken<'a> {
    pub name: &'a str,
    /// Empty when the token carries no `:`
    pub argument: &'a str,
}

impl<'a> RuleToken<'a> {
    /// Classify the token against the known rule vocabulary
    pub fn rule(&self) -> Rule<'a> {
        match self.name {
            "req" => Rule::Required,
            "email" => Rule::Email,
            "lenmin" => Rule::LenMin(self.argument),
            "lenmax" => Rule::LenMax(self.argument),
            "valmin" => Rule::ValMin(self.argument),
            "valmax" => Rule::ValMax(self.argument),
            other => Rule::Unknown(other),
        }
    }
}

/// A classified rule token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule<'a> {
    Required,
    Email,
    LenMin(&'a str),
    LenMax(&'a str),
    ValMin(&'a str),
    ValMax(&'a str),
    /// Unrecognized names are kept so callers can see them, but never fail
    Unknown(&'a str),
}

/// Split a single token on its first `:`
pub fn parse_rule(token: &str) -> RuleToken<'_> {
    match token.split_once(':') {
        Some((name, argument)) => RuleToken { name, argument },
        None => RuleToken {
            name: token,
            argument: "",
        },
    }
}

/// Split a rule tag into its tokens, in order
pub fn tokenize(tag: &str) -> Vec<RuleToken<'_>> {
    tag.split_whitespace().map(parse_rule).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule_with_argument() {
        let token = parse_rule("lenmin:5");
        assert_eq!(token.name, "lenmin");
        assert_eq!(token.argument, "5");
    }

    #[test]
    fn test_parse_rule_splits_on_first_colon_only() {
        let token = parse_rule("valmin:-6:extra");
        assert_eq!(token.name, "valmin");
        assert_eq!(token.argument, "-6:extra");
    }

    #[test]
    fn test_parse_rule_without_argument() {
        let token = parse_rule("req");
        assert_eq!(token.name, "req");
        assert_eq!(token.argument, "");
        assert_eq!(token.rule(), Rule::Required);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let tokens = tokenize("  req\tlenmin:2 \n lenmax:50  ");
        let names: Vec<&str> = tokens.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["req", "lenmin", "lenmax"]);
        assert_eq!(tokens[2].rule(), Rule::LenMax("50"));
    }

    #[test]
    fn test_tokenize_empty_tag() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_unknown_rule_is_preserved() {
        assert_eq!(parse_rule("uuid").rule(), Rule::Unknown("uuid"));
        assert_eq!(parse_rule("email").rule(), Rule::Email);
        assert_eq!(parse_rule("valmax:1.5").rule(), Rule::ValMax("1.5"));
    }

    #[test]
    fn test_pattern_tag_name() {
        assert_eq!(pattern_tag_name(DEFAULT_TAG_NAME), "validation_regexp");
        assert_eq!(pattern_tag_name("mytag"), "mytag_regexp");
    }
}
