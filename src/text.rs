//! Case conversion and accent stripping

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Uppercase the first character, leave the rest untouched
///
/// Uses the full Unicode uppercase mapping, so the first character may
/// expand (`"ß"` becomes `"SS"`). Empty input yields empty output.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leave the rest untouched
pub fn decapitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Remove accents by NFD decomposition and dropping combining marks
///
/// Characters without a decomposition pass through unchanged; the result
/// of a stripped character is its base letter.
///
/// # Examples
///
/// ```rust
/// use content_checks::text::strip_accents;
///
/// assert_eq!(strip_accents("café"), "cafe");
/// assert_eq!(strip_accents("señor"), "senor");
/// assert_eq!(strip_accents("plain"), "plain");
/// ```
pub fn strip_accents(input: &str) -> String {
    input.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("Hello"), "Hello");
        assert_eq!(capitalize("h"), "H");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("123abc"), "123abc");
    }

    #[test]
    fn test_capitalize_expanding_mapping() {
        assert_eq!(capitalize("ßeta"), "SSeta");
    }

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("Hello"), "hello");
        assert_eq!(decapitalize("hello"), "hello");
        assert_eq!(decapitalize("H"), "h");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn test_capitalize_only_touches_first_char() {
        assert_eq!(capitalize("hello World"), "Hello World");
        assert_eq!(decapitalize("HELLO"), "hELLO");
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("café"), "cafe");
        assert_eq!(strip_accents("señor"), "senor");
        assert_eq!(strip_accents("Crème Brûlée"), "Creme Brulee");
        assert_eq!(strip_accents("naïve"), "naive");
    }

    #[test]
    fn test_strip_accents_handles_precomposed_and_decomposed() {
        // U+00E9 precomposed vs "e" + U+0301 combining acute
        assert_eq!(strip_accents("\u{e9}"), "e");
        assert_eq!(strip_accents("e\u{301}"), "e");
    }

    #[test]
    fn test_strip_accents_empty() {
        assert_eq!(strip_accents(""), "");
    }

    proptest! {
        #[test]
        fn prop_strip_accents_is_identity_on_ascii(input in "[ -~]{0,100}") {
            prop_assert_eq!(strip_accents(&input), input);
        }

        #[test]
        fn prop_strip_accents_is_idempotent(input in "\\PC{0,100}") {
            let once = strip_accents(&input);
            let twice = strip_accents(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_capitalize_preserves_tail(input in "[a-z]{1,40}") {
            let capitalized = capitalize(&input);
            prop_assert_eq!(&capitalized[1..], &input[1..]);
        }
    }
}
