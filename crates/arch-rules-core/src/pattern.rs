//! Wildcard patterns over dotted full names.

use std::fmt;

/// A pattern matched against `.` separated full names.
///
/// Supports wildcards:
/// - `*` as a whole segment matches exactly one segment
/// - `**` matches any number of segments, including none
/// - `*` inside a segment matches any run of characters in that segment
///
/// # Examples
///
/// ```
/// use arch_rules_core::NamePattern;
///
/// assert!(NamePattern::new("App.*").matches("App.Service"));
/// assert!(NamePattern::new("App.**").matches("App.Data.Repo"));
/// assert!(NamePattern::new("**.I*Repository").matches("App.Data.IUserRepository"));
/// assert!(!NamePattern::new("App.*").matches("App.Data.Repo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamePattern(String);

impl NamePattern {
    /// Creates a new pattern. Every string is a valid pattern.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Tests whether a full name matches this pattern.
    #[must_use]
    pub fn matches(&self, full_name: &str) -> bool {
        name_matches(full_name, &self.0)
    }

    /// Returns the pattern as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NamePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for NamePattern {
    fn from(pattern: String) -> Self {
        Self(pattern)
    }
}

/// Checks if a dotted full name matches a pattern.
#[must_use]
pub fn name_matches(name: &str, pattern: &str) -> bool {
    let name_parts: Vec<&str> = name.split('.').collect();
    let pattern_parts: Vec<&str> = pattern.split('.').collect();

    match_parts(&name_parts, &pattern_parts)
}

fn match_parts(name: &[&str], pattern: &[&str]) -> bool {
    let Some((&first_pattern, rest_pattern)) = pattern.split_first() else {
        return name.is_empty();
    };

    match first_pattern {
        "**" => (0..=name.len()).any(|i| match_parts(&name[i..], rest_pattern)),
        "*" => !name.is_empty() && match_parts(&name[1..], rest_pattern),
        segment => {
            name.first().is_some_and(|&n| segment_matches(n, segment))
                && match_parts(&name[1..], rest_pattern)
        }
    }
}

fn segment_matches(segment: &str, pattern: &str) -> bool {
    if !pattern.contains('*') {
        return segment == pattern;
    }

    let mut pieces: Vec<&str> = pattern.split('*').collect();
    // `pattern` contains '*', so there are at least two pieces.
    let last = pieces.pop().unwrap_or_default();
    let first = pieces.remove(0);

    let Some(mut rest) = segment.strip_prefix(first) else {
        return false;
    };
    for piece in pieces {
        match rest.find(piece) {
            Some(i) => rest = &rest[i + piece.len()..],
            None => return false,
        }
    }
    rest.ends_with(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_pattern() {
        assert!(name_matches("App.Service", "App.Service"));
        assert!(!name_matches("App.Service", "App.Repo"));
        assert!(!name_matches("App.Service", "Service"));
    }

    #[test]
    fn single_segment_wildcard() {
        assert!(name_matches("App.Service", "App.*"));
        assert!(!name_matches("App.Data.Repo", "App.*"));
        assert!(!name_matches("App", "App.*"));
    }

    #[test]
    fn globstar() {
        assert!(name_matches("App", "App.**"));
        assert!(name_matches("App.Data.Repo", "App.**"));
        assert!(name_matches("App.Data.IRepository", "**.IRepository"));
        assert!(name_matches("IRepository", "**.IRepository"));
        assert!(!name_matches("Other.Data", "App.**"));
    }

    #[test]
    fn wildcard_inside_segment() {
        assert!(name_matches("App.UserRepository", "App.*Repository"));
        assert!(name_matches("App.IUserRepository", "App.I*Repo*"));
        assert!(name_matches("App.Repo", "App.Re*po"));
        assert!(!name_matches("App.UserService", "App.*Repository"));
        assert!(!name_matches("App.aba", "App.ab*ab"));
    }

    #[test]
    fn pattern_display_roundtrips_text() {
        let pattern = NamePattern::from("App.**");
        assert_eq!(pattern.to_string(), "App.**");
        assert_eq!(pattern.as_str(), "App.**");
    }
}
