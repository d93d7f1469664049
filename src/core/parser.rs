//! Splitting an entered line into verb and argument.
//!
//! Only the first two whitespace-separated tokens matter: arguments with
//! embedded spaces are not supported, and anything after the second token is
//! ignored.

/// A non-empty input line, split for dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// First token, lower-cased
    pub verb: String,
    /// Second token, as typed
    pub argument: Option<&'a str>,
}

/// Parse a raw line. Returns `None` for blank input.
pub fn parse_line(raw: &str) -> Option<ParsedLine<'_>> {
    let mut tokens = raw.split_whitespace();
    let verb = tokens.next()?.to_lowercase();
    let argument = tokens.next();

    Some(ParsedLine { verb, argument })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t "), None);
    }

    #[test]
    fn test_verb_is_lowercased_argument_is_not() {
        let parsed = parse_line("CD Documents").unwrap();
        assert_eq!(parsed.verb, "cd");
        assert_eq!(parsed.argument, Some("Documents"));
    }

    #[test]
    fn test_extra_tokens_are_ignored() {
        let parsed = parse_line("  open   my file.pdf ").unwrap();
        assert_eq!(parsed.verb, "open");
        assert_eq!(parsed.argument, Some("my"));
    }

    #[test]
    fn test_verb_only() {
        let parsed = parse_line("ls").unwrap();
        assert_eq!(parsed.verb, "ls");
        assert_eq!(parsed.argument, None);
    }
}
