/// Replacement written in place of every masked occurrence.
pub const REDACTION_TOKEN: &str = "***";

/// Split the raw `masks` input on `delimiter`.
///
/// An empty delimiter falls back to `,`. Trimming and blank filtering happen
/// in [`mask_secrets`], so callers may pass the result straight through.
pub fn split_mask_patterns(raw: &str, delimiter: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let delimiter = if delimiter.is_empty() { "," } else { delimiter };
    raw.split(delimiter).map(ToOwned::to_owned).collect()
}

/// Replace every occurrence of each pattern with [`REDACTION_TOKEN`].
///
/// Patterns are trimmed, blanks dropped, and applied longest first so a
/// shorter secret never masks part of a longer one and leaves the rest visible.
pub fn mask_secrets<S: AsRef<str>>(body: &str, patterns: &[S]) -> String {
    let mut ordered = patterns
        .iter()
        .map(|pattern| pattern.as_ref().trim())
        .filter(|pattern| !pattern.is_empty())
        .collect::<Vec<_>>();
    if ordered.is_empty() {
        return body.to_string();
    }
    ordered.sort_by(|left, right| right.chars().count().cmp(&left.chars().count()));

    let mut masked = body.to_string();
    for pattern in ordered {
        if masked.contains(pattern) {
            masked = masked.replace(pattern, REDACTION_TOKEN);
        }
    }
    masked
}
