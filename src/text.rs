//! Plain-text transforms applied by the file mutators.

/// Remove every run of ASCII decimal digits and lowercase the rest.
///
/// Whitespace and punctuation are preserved, so `"Hello 123 WORLD!"` becomes
/// `"hello  world!"`. Applying it twice gives the same result as applying it once.
pub fn denoise(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect::<String>()
        .to_lowercase()
}
