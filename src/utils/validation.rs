//! Centralized validation and helper functions.

/// Maximum number of data rows accepted from a single table (DOS protection)
pub const MAX_DATASET_ROWS: usize = 100_000;

/// Maximum length in bytes of a free-text symptom query
pub const MAX_INPUT_LENGTH: usize = 4096;

/// Maximum number of vocabulary entries returned by one listing
pub const MAX_VOCABULARY_PAGE: usize = 500;

/// Check if adding another row would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new row.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_row_limit(rows.len()).is_some() {
///     return Err(...);
/// }
/// rows.push(new_row); // Safe to add
/// ```
#[must_use]
pub fn check_row_limit(count: usize) -> Option<String> {
    if count >= MAX_DATASET_ROWS {
        Some(format!(
            "Too many rows: adding another would exceed maximum of {MAX_DATASET_ROWS}"
        ))
    } else {
        None
    }
}

/// Compute a fingerprint over the raw text of the loaded resources.
///
/// Each part is hashed in order with a separator, so swapping the two
/// resources yields a different fingerprint.
///
/// # Examples
///
/// ```
/// use disease_predictor::utils::validation::compute_fingerprint;
///
/// let a = compute_fingerprint(&["Disease\nFlu,fever\n", "Disease,Description\n"]);
/// let b = compute_fingerprint(&["Disease\nFlu,fever\n", "Disease,Description\n"]);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 32);
/// ```
#[must_use]
pub fn compute_fingerprint(parts: &[&str]) -> String {
    let mut context = md5::Context::new();
    for part in parts {
        context.consume(part.as_bytes());
        context.consume([0u8]);
    }
    format!("{:x}", context.compute())
}

/// Clamp a requested vocabulary page size into `1..=MAX_VOCABULARY_PAGE`
#[must_use]
pub fn clamp_page_size(requested: usize) -> usize {
    requested.clamp(1, MAX_VOCABULARY_PAGE)
}

/// Returns true if the string looks like an HTTP(S) URL rather than a file path
#[must_use]
pub fn is_http_url(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
