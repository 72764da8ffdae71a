//! Name variant derivation.
//!
//! A single user-supplied identifier is turned into every casing variant the
//! templates need. Derivation is a pure function: same input, same output,
//! no hidden state.
//!
//! # Word Boundary Detection
//!
//! 1. **Explicit separators:** `_`, `-`, whitespace → always split
//! 2. **Case transition (camelCase):** `aB` → split between `a` and `B`
//! 3. **Acronym boundary:** `HTTPRequest` → split between `P` and `R`
//!    (detected by `Upper Upper Lower` pattern)
//!
//! Because every variant is re-cased from the same word sequence, the
//! variants are mutually consistent: `"object storage"`, `"ObjectStorage"`
//! and `"object-storage"` all yield the same [`NameVariants`].

use serde::Serialize;

use crate::domain::error::DomainError;

/// Every casing variant derived from one identifier.
///
/// Immutable value type. All fields are deterministic functions of
/// `original`; re-deriving from the same input always yields an equal struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameVariants {
    pub original: String,
    pub kebab: String,
    pub camel: String,
    pub pascal: String,
    pub snake: String,
    pub screaming_snake: String,
}

/// Derive all casing variants from one identifier.
///
/// # Errors
///
/// Returns [`DomainError::InvalidName`] when the input is empty, whitespace
/// only, or contains no alphanumeric character to build words from.
pub fn derive_name_variants(input: &str) -> Result<NameVariants, DomainError> {
    let words = split_words(input);
    if words.is_empty() {
        return Err(DomainError::InvalidName {
            name: input.to_string(),
            reason: "must contain at least one alphanumeric character".into(),
        });
    }

    Ok(NameVariants {
        original: input.to_string(),
        kebab: words.join("-"),
        camel: to_camel(&words),
        pascal: to_pascal(&words),
        snake: words.join("_"),
        screaming_snake: words
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
    })
}

/// Split a string into lowercase words based on casing and separators.
fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !c.is_alphanumeric() {
            // Punctuation other than separators is dropped entirely.
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev_lower = chars[i - 1].is_lowercase();
            // `Upper Upper Lower` marks the start of a new word inside an
            // acronym run: HTTP|Request.
            let acronym_end = chars[i - 1].is_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev_lower || acronym_end {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn to_pascal(words: &[String]) -> String {
    words.iter().map(|w| capitalize(w)).collect()
}

fn to_camel(words: &[String]) -> String {
    let mut out = String::new();
    for (i, w) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(w);
        } else {
            out.push_str(&capitalize(w));
        }
    }
    out
}

fn capitalize(w: &str) -> String {
    let mut chars = w.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
