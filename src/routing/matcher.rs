//! Route pattern matching.
//!
//! # Responsibilities
//! - Describe the closed set of route pattern kinds
//! - Match a request path against one pattern
//! - Capture the path variable a pattern binds, if any
//!
//! # Design Decisions
//! - Path matching is case-sensitive and byte-exact
//! - Captures borrow from the input path (no allocation on the hot path)
//! - No regex, no decoding: captured text is returned exactly as given

/// Pattern kinds a route can be registered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches one literal path, e.g. `/`.
    Exact(String),
    /// Matches `/{param}`: exactly one non-empty segment.
    SingleSegment { param: String },
    /// Matches `/{*param}`: any path at all.
    CatchAll { param: String },
}

/// What a pattern extracted from a matching path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture<'p> {
    /// The pattern matched without binding a variable.
    None,
    /// The pattern bound its variable to this text.
    Param(&'p str),
}

impl<'p> Capture<'p> {
    /// Captured value, if any.
    pub fn value(&self) -> Option<&'p str> {
        match self {
            Capture::None => None,
            Capture::Param(value) => Some(*value),
        }
    }
}

impl RoutePattern {
    /// Parse a pattern written in router syntax: `/`, `/{name}`, `/{*path}`.
    ///
    /// Anything that is not a single `{..}` placeholder is treated as an exact path.
    pub fn parse(pattern: &str) -> Self {
        let placeholder = pattern
            .strip_prefix("/{")
            .and_then(|rest| rest.strip_suffix('}'))
            .filter(|inner| !inner.is_empty() && !inner.contains(['/', '{', '}']));

        match placeholder {
            Some(inner) => match inner.strip_prefix('*') {
                Some(param) if !param.is_empty() => RoutePattern::CatchAll {
                    param: param.to_string(),
                },
                Some(_) => RoutePattern::Exact(pattern.to_string()),
                None => RoutePattern::SingleSegment {
                    param: inner.to_string(),
                },
            },
            None => RoutePattern::Exact(pattern.to_string()),
        }
    }

    /// Specificity rank; lower ranks are tried first.
    pub fn specificity(&self) -> u8 {
        match self {
            RoutePattern::Exact(_) => 0,
            RoutePattern::SingleSegment { .. } => 1,
            RoutePattern::CatchAll { .. } => 2,
        }
    }

    /// Match `path` against this pattern.
    ///
    /// Returns `None` when the path does not match.
    pub fn capture<'p>(&'p self, path: &'p str) -> Option<Capture<'p>> {
        match self {
            RoutePattern::Exact(expected) => (path == expected.as_str()).then_some(Capture::None),
            RoutePattern::SingleSegment { .. } => {
                let segment = path.strip_prefix('/')?;
                if segment.is_empty() || segment.contains('/') {
                    return None;
                }
                Some(Capture::Param(segment))
            }
            RoutePattern::CatchAll { .. } => {
                Some(Capture::Param(path.strip_prefix('/').unwrap_or(path)))
            }
        }
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoutePattern::Exact(path) => write!(f, "{}", path),
            RoutePattern::SingleSegment { param } => write!(f, "/{{{}}}", param),
            RoutePattern::CatchAll { param } => write!(f, "/{{*{}}}", param),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patterns() {
        assert_eq!(RoutePattern::parse("/"), RoutePattern::Exact("/".into()));
        assert_eq!(
            RoutePattern::parse("/{name}"),
            RoutePattern::SingleSegment { param: "name".into() }
        );
        assert_eq!(
            RoutePattern::parse("/{*path}"),
            RoutePattern::CatchAll { param: "path".into() }
        );
        // Malformed placeholders fall back to literal paths
        assert_eq!(RoutePattern::parse("/{*}"), RoutePattern::Exact("/{*}".into()));
        assert_eq!(RoutePattern::parse("/{}"), RoutePattern::Exact("/{}".into()));
    }

    #[test]
    fn test_display_round_trips_syntax() {
        for raw in ["/", "/{name}", "/{*path}"] {
            assert_eq!(RoutePattern::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_exact_matcher() {
        let pattern = RoutePattern::Exact("/".into());
        assert_eq!(pattern.capture("/"), Some(Capture::None));
        assert_eq!(pattern.capture("/x"), None);
        assert_eq!(pattern.capture(""), None);
    }

    #[test]
    fn test_single_segment_matcher() {
        let pattern = RoutePattern::SingleSegment { param: "name".into() };

        let captured = pattern.capture("/john").unwrap();
        assert_eq!(captured, Capture::Param("john"));

        assert_eq!(pattern.capture("/"), None);
        assert_eq!(pattern.capture("/a/b"), None);
        assert_eq!(pattern.capture("/john/"), None); // trailing slash is a second segment
        assert_eq!(pattern.capture("john"), None);
    }

    #[test]
    fn test_single_segment_is_verbatim() {
        let pattern = RoutePattern::SingleSegment { param: "name".into() };
        for raw in ["%2e%2e", "..", "<script>alert(1)<\\script>", "a\u{0}b", "J\u{f6}rg"] {
            let path = format!("/{}", raw);
            assert_eq!(pattern.capture(&path).and_then(|c| c.value()), Some(raw));
        }
    }

    #[test]
    fn test_markup_with_slash_is_not_single_segment() {
        let pattern = RoutePattern::SingleSegment { param: "name".into() };
        assert_eq!(pattern.capture("/<script>alert(1)</script>"), None);
        assert_eq!(pattern.capture("/<b>x</b>"), None);
    }

    #[test]
    fn test_catch_all_matches_everything() {
        let pattern = RoutePattern::CatchAll { param: "path".into() };
        assert_eq!(pattern.capture("/a/b/c").and_then(|c| c.value()), Some("a/b/c"));
        assert_eq!(pattern.capture("/").and_then(|c| c.value()), Some(""));
        assert_eq!(pattern.capture("").and_then(|c| c.value()), Some(""));
        assert_eq!(pattern.capture("no-slash").and_then(|c| c.value()), Some("no-slash"));
    }

    #[test]
    fn test_specificity_order() {
        let exact = RoutePattern::parse("/");
        let single = RoutePattern::parse("/{name}");
        let catch_all = RoutePattern::parse("/{*path}");
        assert!(exact.specificity() < single.specificity());
        assert!(single.specificity() < catch_all.specificity());
    }
}
