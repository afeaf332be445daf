/// Returns `true` if `input` reads the same forwards and backwards.
///
/// Whitespace, including the ASCII separator controls U+001C to U+001F, is
/// removed and the remaining characters are lowercased before comparing. Punctuation is compared literally, so `"race!car"` is not a
/// palindrome.
///
/// # Examples
///
/// ```
/// use qualifying_offer::is_palindrome;
///
/// assert!(is_palindrome("Race car"));
/// assert!(!is_palindrome("race cars"));
/// ```
#[must_use]
pub fn is_palindrome(input: &str) -> bool {
    let normalized = normalize(input);

    let Some(mut j) = normalized.len().checked_sub(1) else {
        return true;
    };

    for (i, c) in normalized.iter().enumerate() {
        if j <= i {
            return true;
        }
        if *c != normalized[j] {
            return false;
        }
        j -= 1;
    }

    true
}

fn normalize(input: &str) -> Vec<char> {
    input
        .chars()
        .filter(|&c| !is_space(c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}
