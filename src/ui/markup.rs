//! Helpers for bracket-style console markup (`[bold green]text[/]`).
//!
//! Literal brackets are written doubled (`[[`, `]]`). [`escape_markup`] makes
//! arbitrary text safe to embed in markup, so `Children[0].Name` becomes
//! `Children[[0]].Name`; [`remove_markup`] strips tags and undoes escaping.

/// Doubles every `[` and `]` so the text is treated literally.
#[must_use]
pub fn escape_markup(text: &str) -> String {
    text.replace('[', "[[").replace(']', "]]")
}

/// Removes markup tags and unescapes doubled brackets.
///
/// A `[` without a closing `]` is kept as-is, along with the rest of the text.
///
/// # Example
///
/// ```rust
/// use pillbox::ui::markup::remove_markup;
///
/// assert_eq!(remove_markup("[bold]Hi[/] [[there]]"), "Hi [there]");
/// ```
#[must_use]
pub fn remove_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if rest.starts_with("[[") {
            out.push('[');
            rest = &rest[2..];
        } else if rest.starts_with("]]") {
            out.push(']');
            rest = &rest[2..];
        } else if c == '[' {
            match rest.find(']') {
                Some(close) => rest = &rest[close + 1..],
                None => {
                    out.push_str(rest);
                    rest = "";
                }
            }
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_doubles_brackets() {
        assert_eq!(escape_markup("Children[0].Name"), "Children[[0]].Name");
        assert_eq!(escape_markup("plain"), "plain");
    }

    #[test]
    fn remove_strips_tags() {
        assert_eq!(remove_markup("[cyan]Humans[/]"), "Humans");
        assert_eq!(remove_markup("[bold green]0   [/]: [yellow]1.50[/]"), "0   : 1.50");
    }

    #[test]
    fn remove_undoes_escape() {
        let original = "Children[0].Name";
        assert_eq!(remove_markup(&escape_markup(original)), original);
    }

    #[test]
    fn unclosed_bracket_is_kept() {
        assert_eq!(remove_markup("a [b"), "a [b");
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(remove_markup("[red]héllo ♀[/]"), "héllo ♀");
    }
}
