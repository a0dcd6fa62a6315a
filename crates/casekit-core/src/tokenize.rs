//! Word-boundary detection for irregularly formatted identifiers.
//!
//! The tokenizer turns a normalized string into an ordered sequence of
//! lowercase words. Boundaries come from camelCase transitions, acronym
//! runs followed by a word, digit/letter adjacency, and explicit
//! separator characters. Detection is an explicit character
//! classification scan rather than a set of patterns, so the ASCII
//! scope is visible in the code: non-ASCII characters are never casing
//! boundaries and pass through as ordinary token content.

/// Which characters count as explicit word separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separators {
    /// Whitespace, `_`, `-`, `.`, `/` and `\`
    Delimiters,
    /// `Delimiters` without the dot; dots are ordinary punctuation.
    /// Kebab case uses this so inputs like e-mail addresses and domain
    /// names survive the preserve option unchanged.
    DelimitersExceptDot,
    /// Every run of non-alphanumeric characters splits words
    AnyNonAlphanumeric,
}

impl Separators {
    fn is_separator(self, c: char) -> bool {
        match self {
            Separators::Delimiters => {
                c.is_whitespace() || matches!(c, '_' | '-' | '.' | '/' | '\\')
            }
            Separators::DelimitersExceptDot => {
                c.is_whitespace() || matches!(c, '_' | '-' | '/' | '\\')
            }
            Separators::AnyNonAlphanumeric => !c.is_ascii_alphanumeric(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Separator,
    Other,
}

fn classify(c: char, separators: Separators) -> CharClass {
    if separators.is_separator(c) {
        CharClass::Separator
    } else if c.is_ascii_lowercase() {
        CharClass::Lower
    } else if c.is_ascii_uppercase() {
        CharClass::Upper
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

/// Split `input` into lowercase word tokens.
///
/// Runs of separator characters collapse to a single split point and
/// never produce empty tokens, so empty or all-separator input yields
/// an empty sequence.
pub fn tokenize(input: &str, separators: Separators) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if classify(c, separators) == CharClass::Separator {
            flush(&mut tokens, &mut current);
            continue;
        }
        if i > 0 && boundary_before(&chars, i, separators) {
            flush(&mut tokens, &mut current);
        }
        current.push(c.to_ascii_lowercase());
    }
    flush(&mut tokens, &mut current);
    tokens
}

/// Whether an implicit word boundary sits between `chars[i - 1]` and
/// `chars[i]`.
fn boundary_before(chars: &[char], i: usize, separators: Separators) -> bool {
    let prev = classify(chars[i - 1], separators);
    let cur = classify(chars[i], separators);
    let next = chars.get(i + 1).map(|&c| classify(c, separators));

    match (prev, cur) {
        // camelCase transition
        (CharClass::Lower, CharClass::Upper) => true,
        // acronym run followed by a word: split before the last upper
        (CharClass::Upper, CharClass::Upper) => next == Some(CharClass::Lower),
        // digit/letter adjacency, both directions
        (CharClass::Lower | CharClass::Upper, CharClass::Digit) => true,
        (CharClass::Digit, CharClass::Lower | CharClass::Upper) => true,
        _ => false,
    }
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        tokenize(input, Separators::Delimiters)
    }

    #[test]
    fn test_camel_transitions() {
        assert_eq!(words("camelCase"), ["camel", "case"]);
        assert_eq!(words("PascalCase"), ["pascal", "case"]);
        assert_eq!(words("alreadyCamelCase"), ["already", "camel", "case"]);
    }

    #[test]
    fn test_acronym_runs_split_before_the_trailing_word() {
        assert_eq!(words("XMLParser"), ["xml", "parser"]);
        assert_eq!(words("XMLHttpRequest"), ["xml", "http", "request"]);
        assert_eq!(words("parseHTML"), ["parse", "html"]);
    }

    #[test]
    fn test_acronym_only_input_stays_one_token() {
        assert_eq!(words("HTML"), ["html"]);
    }

    #[test]
    fn test_digit_letter_adjacency_in_both_directions() {
        assert_eq!(words("item2Name"), ["item", "2", "name"]);
        assert_eq!(words("HTML5Parser"), ["html", "5", "parser"]);
        assert_eq!(words("version2Beta"), ["version", "2", "beta"]);
    }

    #[test]
    fn test_digit_runs_stay_together() {
        assert_eq!(words("user42id"), ["user", "42", "id"]);
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(words("___hello___world___"), ["hello", "world"]);
        assert_eq!(words("a.b/c\\d-e f"), ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_empty_and_all_separator_input() {
        assert_eq!(words(""), Vec::<String>::new());
        assert_eq!(words("-_./ \\"), Vec::<String>::new());
    }

    #[test]
    fn test_punctuation_stays_in_tokens_unless_separating() {
        assert_eq!(
            tokenize("hello@world.com", Separators::DelimitersExceptDot),
            ["hello@world.com"]
        );
        assert_eq!(
            tokenize("hello@world.com", Separators::Delimiters),
            ["hello@world", "com"]
        );
        assert_eq!(
            tokenize("hello@world.com", Separators::AnyNonAlphanumeric),
            ["hello", "world", "com"]
        );
    }
}
