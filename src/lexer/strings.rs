/// Determines if a string literal is correctly delimited.
///
/// Normal literals (`"..."`, optionally behind a non-raw prefix such as `b`) must
/// end with an unescaped `"`. Raw literals (`r"..."`, `r#"..."#`, ...) must end
/// with a `"` followed by exactly as many `#` as the prefix carries, and nothing else.
///
/// # Example
///
/// ```
/// use lexical_diagnostics::lexer::strings::is_terminated;
///
/// assert!(is_terminated("\"hello\""));
/// assert!(is_terminated("r#\"hello\"#"));
/// assert!(!is_terminated("r##\"hello\"###"));
/// ```
pub fn is_terminated(literal: &str) -> bool {
    let bytes = literal.as_bytes();

    let Some(opening) = bytes.iter().position(|&c| c == b'"') else {
        return false;
    };

    let Some(closing) = bytes[opening + 1..]
        .iter()
        .rposition(|&c| c == b'"')
        .map(|offset| opening + 1 + offset)
    else {
        return false;
    };

    let prefix = &literal[..opening];
    let suffix = &bytes[closing + 1..];

    if is_raw_prefix(prefix) {
        // only the `#`s between `r` and the opening quote delimit
        let delimiters = prefix.rsplit('r').next().unwrap_or_default().len();
        suffix.len() == delimiters && suffix.iter().all(|&c| c == b'#')
    } else {
        suffix.is_empty() && !is_escaped(&bytes[opening + 1..closing])
    }
}

/// `r` followed by zero or more `#`, possibly behind another prefix letter (`br`).
fn is_raw_prefix(prefix: &str) -> bool {
    prefix.trim_end_matches('#').ends_with('r')
}

/// Checks if the character following `body` would be escaped, i.e. `body` ends
/// with an odd run of backslashes.
fn is_escaped(body: &[u8]) -> bool {
    body.iter().rev().take_while(|&&c| c == b'\\').count() % 2 == 1
}
