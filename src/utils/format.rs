//! Formatting helpers for hosts that cannot render markup.

/// Convert a documentation block to plain text.
///
/// Tags are dropped, `<br>` becomes a line break, source newlines collapse to
/// spaces (as a browser would treat them), and the common entities are
/// decoded. Each line is trimmed; blank lines at either end are removed.
pub fn strip_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut chars = markup.chars();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                let tag: String = chars.by_ref().take_while(|&c| c != '>').collect();
                let name = tag.trim().trim_start_matches('/').to_ascii_lowercase();
                if name.starts_with("br") {
                    out.push('\n');
                }
            }
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }

    let decoded = decode_entities(&out);
    let lines: Vec<&str> = decoded.lines().map(str::trim).collect();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(start, |i| i + 1);

    lines[start..end].join("\n")
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_and_breaks() {
        assert_eq!(strip_markup("<span>Hi</span><br>there"), "Hi\nthere");
        assert_eq!(strip_markup("a<br/>b<BR>c"), "a\nb\nc");
    }

    #[test]
    fn test_source_newlines_collapse() {
        let markup = "\n<b>Title</b><br>\n  line one<br><br>\nline two<br>\n";
        assert_eq!(strip_markup(markup), "Title\nline one\n\nline two");
    }

    #[test]
    fn test_entities() {
        assert_eq!(strip_markup("&gt;&gt; ABOUT &amp; ME"), ">> ABOUT & ME");
    }

    #[test]
    fn test_empty() {
        assert_eq!(strip_markup(""), "");
        assert_eq!(strip_markup("<br><br>"), "");
    }
}
