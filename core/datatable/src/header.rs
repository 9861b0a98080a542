//! FILENAME: core/datatable/src/header.rs
//! PURPOSE: Selects which header a rename applies to.

use regex::Regex;
use std::fmt;

/// Matches a header either by exact name or by regular expression.
#[derive(Debug, Clone)]
pub enum HeaderMatcher {
    Exact(String),
    Pattern(Regex),
}

impl HeaderMatcher {
    pub fn matches(&self, header: &str) -> bool {
        match self {
            HeaderMatcher::Exact(name) => name == header,
            HeaderMatcher::Pattern(re) => re.is_match(header),
        }
    }
}

impl fmt::Display for HeaderMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderMatcher::Exact(name) => write!(f, "\"{}\"", name),
            HeaderMatcher::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

impl From<&str> for HeaderMatcher {
    fn from(name: &str) -> Self {
        HeaderMatcher::Exact(name.to_string())
    }
}

impl From<String> for HeaderMatcher {
    fn from(name: String) -> Self {
        HeaderMatcher::Exact(name)
    }
}

impl From<&String> for HeaderMatcher {
    fn from(name: &String) -> Self {
        HeaderMatcher::Exact(name.clone())
    }
}

impl From<Regex> for HeaderMatcher {
    fn from(re: Regex) -> Self {
        HeaderMatcher::Pattern(re)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let matcher = HeaderMatcher::from("Name");
        assert!(matcher.matches("Name"));
        assert!(!matcher.matches("name"));
        assert!(!matcher.matches("Name "));
    }

    #[test]
    fn test_pattern_match() {
        let matcher = HeaderMatcher::from(Regex::new(r"(?i)^phone").unwrap());
        assert!(matcher.matches("Phone number"));
        assert!(!matcher.matches("Mobile phone"));
        assert_eq!(matcher.to_string(), "/(?i)^phone/");
    }
}
