//! Link formatting for external markdown references.

use crate::normalize::normalize_url;

/// Raw user-supplied link fields.
///
/// Both fields are untrusted: either may be empty, all-whitespace, or
/// contain markdown-significant characters. Validation happens in
/// [`format_link`], not at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    /// Display text for the link
    pub text: String,
    /// Target URL, not guaranteed to be parseable
    pub url: String,
}

/// Returns true when string contains no non-whitespace character.
///
/// Empty strings, all-spaces, and all-tabs/newlines all count as blank.
/// This is the sole validity gate for link fields: no length limits and
/// no character-set restrictions beyond one non-whitespace character.
///
/// # Arguments
///
/// * `s`: String to inspect
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Formats a link request into markdown, or signals that nothing should
/// be inserted.
///
/// Returns `None` when either field is blank; a blank submission is
/// treated as a cancelled dialog rather than an error, so no message
/// is surfaced. Otherwise the URL is normalized (tracking-parameter
/// and trailing-slash removal, see [`normalize_url`]) and the result
/// is `[text](url)`.
///
/// The display text is inserted verbatim. Markdown-significant
/// characters such as `]` or `)` are not escaped, so pathological
/// text produces malformed markdown; matching that long-standing
/// behavior is preferred over changing observable output.
///
/// # Arguments
///
/// * `request`: Raw text and URL fields as typed by the user
///
/// # Returns
///
/// Ready-to-insert markdown link, or `None` when no insertion should occur
pub fn format_link(request: &LinkRequest) -> Option<String> {
    if is_blank(&request.text) || is_blank(&request.url) {
        return None;
    }

    Some(format!(
        "[{}]({})",
        request.text,
        normalize_url(&request.url)
    ))
}
