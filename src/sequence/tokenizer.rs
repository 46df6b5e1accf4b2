//! Splits an entry name into prefix, frame number, suffix and extension.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Last ASCII digit run of a stem: `(prefix ending in a non-digit)?(digits)(non-digits)`.
static FRAME_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(.*[^0-9])?([0-9]+)([^0-9]*)$").unwrap());

/// A name split around its frame number.
///
/// `prefix + zero-padded(number, padding) + suffix + extension` reproduces
/// the original name exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Text before the frame number. A `-` directly before the digits stays here.
    pub prefix: String,
    /// Numeric value of the frame number.
    pub number: u64,
    /// Literal digit count, leading zeros included.
    pub padding: usize,
    /// Text between the frame number and the extension.
    pub suffix: String,
    /// Final extension including its dot, or empty.
    pub extension: String,
}

impl Token {
    /// Re-renders the original name.
    pub fn render(&self) -> String {
        format!(
            "{}{:0width$}{}{}",
            self.prefix,
            self.number,
            self.suffix,
            self.extension,
            width = self.padding
        )
    }

    /// Everything after the frame number.
    pub fn tail(&self) -> String {
        format!("{}{}", self.suffix, self.extension)
    }
}

/// Tokenizes a name, returning `None` when it has no usable frame number.
///
/// The frame number is the last run of ASCII digits before the final
/// extension separator. A leading dot does not start an extension, so
/// `.123` is a stem with digits, and an all-digit final component is the
/// frame number itself (`render.0001`). Digit runs too large for `u64`
/// yield `None`.
///
/// # Examples
///
/// ```
/// use seqls::sequence::tokenize;
///
/// let token = tokenize("v2_shot.0012.exr").unwrap();
/// assert_eq!(token.prefix, "v2_shot.");
/// assert_eq!(token.number, 12);
/// assert_eq!(token.padding, 4);
/// assert_eq!(token.extension, ".exr");
///
/// assert!(tokenize("readme.txt").is_none());
/// assert!(tokenize("movie.mp4").is_none());
/// ```
pub fn tokenize(name: &str) -> Option<Token> {
    let (stem, extension) = split_extension(name);
    let caps = FRAME_RUN_RE.captures(stem)?;
    let digits = caps.get(2)?.as_str();
    let number = match digits.parse::<u64>() {
        Ok(n) => n,
        Err(e) => {
            trace!("Ignoring frame number in '{}': {}", name, e);
            return None;
        }
    };
    Some(Token {
        prefix: caps.get(1).map_or("", |m| m.as_str()).to_string(),
        number,
        padding: digits.len(),
        suffix: caps.get(3).map_or("", |m| m.as_str()).to_string(),
        extension: extension.to_string(),
    })
}

fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 && !is_all_digits(&name[i + 1..]) => name.split_at(i),
        _ => (name, ""),
    }
}

fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
