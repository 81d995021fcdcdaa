//! Text normalization helpers for person fields.

/// Capitalizes every space-separated word of `input`.
///
/// The first letter of each word is upper-cased and the remaining letters are
/// lower-cased. A first letter whose upper-case form is more than one character
/// (`ß` becomes `SS`) is kept as written, so normalizing twice gives the same
/// result. Whitespace is preserved exactly: leading, trailing and repeated
/// spaces survive unchanged.
///
/// # Examples
///
/// ```
/// use coursebook::utils::text::capitalize_words;
///
/// assert_eq!(capitalize_words("bob choo"), "Bob Choo");
/// assert_eq!(capitalize_words("ALEX yeoh "), "Alex Yeoh ");
/// ```
pub fn capitalize_words(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => out.push(single),
                _ => out.push(c),
            }
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
