//! Case strategies and the rendering pipeline.
//!
//! A strategy pairs a per-word capitalization rule with a joiner and a
//! separator policy. The pipeline is a pure function of the input, the
//! strategy and the preserve option: validate, trim, tokenize, render,
//! then scrub joiner runs. No state survives a call.
//!
//! # Examples
//!
//! ```
//! use casekit_core::{to_camel_case, to_kebab_case};
//!
//! assert_eq!(to_camel_case("first name").unwrap(), "firstName");
//! assert_eq!(to_kebab_case("XMLHttpRequest", false).unwrap(), "xml-http-request");
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::tokenize::{tokenize, Separators};
use crate::validate::RawInput;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Supported casing strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Case {
    /// lowerCamelCase with full boundary detection
    #[default]
    Camel,
    /// kebab-case; honors the preserve-special-characters option
    Kebab,
    /// dot.case
    Dot,
    /// Legacy camel casing that only splits on literal spaces. Weaker
    /// than `Camel` on purpose; callers depend on the narrower
    /// splitting, so it stays a distinct strategy.
    SpaceJoinCamel,
}

impl Case {
    /// Returns the strategy identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Kebab => "kebab",
            Self::Dot => "dot",
            Self::SpaceJoinCamel => "space-join-camel",
        }
    }

    /// Returns an iterator over all strategies
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Camel, Self::Kebab, Self::Dot, Self::SpaceJoinCamel]
            .iter()
            .copied()
    }

    /// Convert an already-validated string under this strategy
    pub fn apply(self, input: &str) -> String {
        convert(input, self)
    }

    /// Like [`Case::apply`], with the preserve option. Only kebab case
    /// reads the flag.
    pub fn apply_with(self, input: &str, keep_special_chars: bool) -> String {
        convert_with(input, self, keep_special_chars)
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Case::Camel),
            "kebab" | "kebab-case" => Ok(Case::Kebab),
            "dot" | "dot-case" => Ok(Case::Dot),
            "space-join-camel" => Ok(Case::SpaceJoinCamel),
            _ => Err(format!("Unknown case strategy: {}", s)),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Convert a string under `case` with the preserve option off.
///
/// Total over all strings: empty input and all-separator input render
/// to the empty string.
pub fn convert(input: &str, case: Case) -> String {
    convert_with(input, case, false)
}

/// Convert a string under `case`.
///
/// `keep_special_chars` only affects kebab case: when set, characters
/// outside letters, digits and the joiner survive the scrub step.
pub fn convert_with(input: &str, case: Case, keep_special_chars: bool) -> String {
    match case {
        Case::Camel => {
            // The camel splitter treats every non-alphanumeric run as a
            // separator, so punctuation never reaches the output.
            let tokens = tokenize(input, Separators::AnyNonAlphanumeric);
            join_camel(&tokens)
        }
        Case::Kebab => {
            let tokens = tokenize(input, Separators::DelimitersExceptDot);
            scrub(&tokens.join("-"), '-', keep_special_chars)
        }
        Case::Dot => {
            let tokens = tokenize(input, Separators::Delimiters);
            scrub(&tokens.join("."), '.', false)
        }
        Case::SpaceJoinCamel => space_join_camel(input),
    }
}

/// Convert a dynamically typed value under `case`, validating first.
pub fn convert_value(input: impl RawInput, case: Case, keep_special_chars: bool) -> Result<String> {
    Ok(convert_with(&input.normalize()?, case, keep_special_chars))
}

/// Convert any input to camelCase.
///
/// Fails with a type mismatch for non-string input; never fails for
/// string input.
pub fn to_camel_case(input: impl RawInput) -> Result<String> {
    Ok(convert(&input.normalize()?, Case::Camel))
}

/// Convert any input to kebab-case.
///
/// `keep_special_chars` preserves characters outside `[a-z0-9-]`
/// instead of stripping them.
pub fn to_kebab_case(input: impl RawInput, keep_special_chars: bool) -> Result<String> {
    Ok(convert_with(&input.normalize()?, Case::Kebab, keep_special_chars))
}

/// Convert any input to dot.case.
pub fn to_dot_case(input: impl RawInput) -> Result<String> {
    Ok(convert(&input.normalize()?, Case::Dot))
}

/// Convert any input to camelCase, splitting on literal spaces only.
///
/// The legacy variant: no camel/acronym/digit boundary detection and no
/// punctuation handling. Unlike its untyped ancestor it validates its
/// input like every other entry point.
pub fn space_join_camel_case(input: impl RawInput) -> Result<String> {
    Ok(convert(&input.normalize()?, Case::SpaceJoinCamel))
}

/// First token verbatim, every later token capitalized, no joiner.
fn join_camel(tokens: &[String]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            out.push_str(token);
        } else {
            out.push_str(&capitalize(token));
        }
    }
    out
}

fn space_join_camel(input: &str) -> String {
    input
        .split(' ')
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_ascii_lowercase();
            if i == 0 {
                lower
            } else {
                capitalize(&lower)
            }
        })
        .collect()
}

/// Uppercase the first character, leave the remainder untouched
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Post-process a joined kebab/dot string: drop characters outside
/// letters, digits and the joiner (unless preserving), collapse joiner
/// runs, and trim joiners from both ends.
fn scrub(joined: &str, joiner: char, keep_special_chars: bool) -> String {
    let mut out = String::with_capacity(joined.len());
    let mut prev_joiner = false;
    for c in joined.chars() {
        if c == joiner {
            if !prev_joiner && !out.is_empty() {
                out.push(c);
            }
            prev_joiner = true;
            continue;
        }
        if !keep_special_chars && !c.is_ascii_lowercase() && !c.is_ascii_digit() {
            continue;
        }
        out.push(c);
        prev_joiner = false;
    }
    while out.ends_with(joiner) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("first name").unwrap(), "firstName");
        assert_eq!(to_camel_case("SCREEN_NAME").unwrap(), "screenName");
        assert_eq!(to_camel_case("user_id").unwrap(), "userId");
        assert_eq!(to_camel_case("mobile-number").unwrap(), "mobileNumber");
        assert_eq!(to_camel_case("HTML parser").unwrap(), "htmlParser");
        assert_eq!(to_camel_case("item_2_name").unwrap(), "item2Name");
        assert_eq!(to_camel_case("XMLHttpRequest").unwrap(), "xmlHttpRequest");
        assert_eq!(to_camel_case("alreadyCamelCase").unwrap(), "alreadyCamelCase");
    }

    #[test]
    fn test_camel_case_drops_punctuation() {
        assert_eq!(to_camel_case("hello@world.com").unwrap(), "helloWorldCom");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("hello world", false).unwrap(), "hello-world");
        assert_eq!(to_kebab_case("user_name", false).unwrap(), "user-name");
        assert_eq!(to_kebab_case("HelloWorld", false).unwrap(), "hello-world");
        assert_eq!(
            to_kebab_case("camelCaseString", false).unwrap(),
            "camel-case-string"
        );
        assert_eq!(
            to_kebab_case("XMLHttpRequest", false).unwrap(),
            "xml-http-request"
        );
        assert_eq!(to_kebab_case("parseHTML", false).unwrap(), "parse-html");
        assert_eq!(to_kebab_case("item_2_name", false).unwrap(), "item-2-name");
        assert_eq!(
            to_kebab_case("version2Beta", false).unwrap(),
            "version-2-beta"
        );
        assert_eq!(
            to_kebab_case("HTML5Parser", false).unwrap(),
            "html-5-parser"
        );
    }

    #[test]
    fn test_kebab_case_edges() {
        assert_eq!(
            to_kebab_case("  hello world  ", false).unwrap(),
            "hello-world"
        );
        assert_eq!(
            to_kebab_case("already-kebab-case", false).unwrap(),
            "already-kebab-case"
        );
        assert_eq!(to_kebab_case("", false).unwrap(), "");
        assert_eq!(to_kebab_case("single", false).unwrap(), "single");
        assert_eq!(
            to_kebab_case("___hello___world___", false).unwrap(),
            "hello-world"
        );
    }

    #[test]
    fn test_kebab_case_special_characters() {
        assert_eq!(
            to_kebab_case("hello@world.com", false).unwrap(),
            "helloworldcom"
        );
        assert_eq!(
            to_kebab_case("hello@world.com", true).unwrap(),
            "hello@world.com"
        );
    }

    #[test]
    fn test_to_dot_case() {
        assert_eq!(to_dot_case("hello world").unwrap(), "hello.world");
        assert_eq!(to_dot_case("HTML parser").unwrap(), "html.parser");
        assert_eq!(to_dot_case("item_2_name").unwrap(), "item.2.name");
        assert_eq!(to_dot_case("XMLHttpRequest").unwrap(), "xml.http.request");
        assert_eq!(to_dot_case("already.dot.case").unwrap(), "already.dot.case");
    }

    #[test]
    fn test_space_join_camel_case() {
        assert_eq!(space_join_camel_case("i love you").unwrap(), "iLoveYou");
        assert_eq!(space_join_camel_case("first name").unwrap(), "firstName");
        // No boundary detection: underscores are not separators here
        assert_eq!(space_join_camel_case("SCREEN_NAME").unwrap(), "screen_name");
        assert_eq!(space_join_camel_case("a  b").unwrap(), "aB");
    }

    #[test]
    fn test_empty_inputs_render_empty() {
        for case in Case::all() {
            assert_eq!(convert("", case), "");
            assert_eq!(convert("   ", case), "");
        }
        assert_eq!(convert("-_./\\", Case::Kebab), "");
        assert_eq!(convert("-_./\\", Case::Dot), "");
    }

    #[test]
    fn test_case_parsing_round_trips() {
        for case in Case::all() {
            assert_eq!(case.as_str().parse::<Case>().unwrap(), case);
        }
        assert_eq!("camelCase".parse::<Case>().unwrap(), Case::Camel);
        assert!("snake".parse::<Case>().is_err());
    }
}
