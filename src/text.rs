//! Small string helpers for names and titles

/// Uppercase the character at char index `pos`.
///
/// An out-of-range index leaves the string unchanged.
pub fn capitalize_at(s: &str, pos: usize) -> String {
    s.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let upper: Vec<char> = if i == pos {
                c.to_uppercase().collect()
            } else {
                vec![c]
            };
            upper
        })
        .collect()
}

/// Uppercase first letter of every word, leaving the rest as is
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// First character of each whitespace-separated word, uppercased
pub fn initials(name: &str) -> Vec<String> {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_uppercase().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_at() {
        assert_eq!(capitalize_at("hello", 0), "Hello");
        assert_eq!(capitalize_at("hello", 4), "hellO");
        assert_eq!(capitalize_at("mcdonald", 2), "mcDonald");
        assert_eq!(capitalize_at("hello", 10), "hello");
        assert_eq!(capitalize_at("", 0), "");
    }

    #[test]
    fn test_capitalize_at_multichar_upper() {
        // German sharp s uppercases to two characters
        assert_eq!(capitalize_at("\u{df}a", 0), "SSa");
        assert_eq!(capitalize_at("\u{e9}t\u{e9}", 2), "\u{e9}t\u{c9}");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("the old man and the sea"), "The Old Man And The Sea");
        assert_eq!(capitalize_words("  two  spaces"), "  Two  Spaces");
        assert_eq!(capitalize_words("already Up"), "Already Up");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("john ronald reuel tolkien"), vec!["J", "R", "R", "T"]);
        assert_eq!(initials("  ursula   le guin "), vec!["U", "L", "G"]);
        assert!(initials("").is_empty());
        assert!(initials("   ").is_empty());
    }
}
