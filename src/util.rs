//! Text collection helpers shared by the engines.

use crate::model::{Node, Role};

/// Collect the text of a subtree with whitespace collapsed.
///
/// Runs of whitespace inside a text leaf become a single space. Whitespace
/// at the edges of a leaf is kept as one separating space so that adjacent
/// marks ("**bold** text") still read naturally. The result is trimmed.
pub fn collect_text(node: &Node) -> String {
    let mut result = String::new();
    collect_text_recursive(node, &mut result);
    result.trim().to_string()
}

fn collect_text_recursive(node: &Node, result: &mut String) {
    if node.role == Role::Text
        && let Some(text) = node.text.as_deref()
    {
        let has_leading = text.starts_with(char::is_whitespace);
        let has_trailing = text.ends_with(char::is_whitespace);
        let words: Vec<&str> = text.split_whitespace().collect();

        if !words.is_empty() {
            if has_leading && !result.is_empty() && !result.ends_with(' ') {
                result.push(' ');
            }
            result.push_str(&words.join(" "));
            if has_trailing {
                result.push(' ');
            }
        } else if !text.is_empty() && !result.is_empty() && !result.ends_with(' ') {
            result.push(' ');
        }
    }

    for child in &node.content {
        collect_text_recursive(child, result);
    }
}

/// Collect the text of a subtree exactly as written (code blocks).
pub fn collect_text_verbatim(node: &Node) -> String {
    let mut result = String::new();
    collect_text_verbatim_recursive(node, &mut result);
    result
}

fn collect_text_verbatim_recursive(node: &Node, result: &mut String) {
    if node.role == Role::Text
        && let Some(text) = node.text.as_deref()
    {
        result.push_str(text);
    }

    for child in &node.content {
        collect_text_verbatim_recursive(child, result);
    }
}

/// Trim a string and treat whitespace-only as absent.
pub fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

/// Shorten `text` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
