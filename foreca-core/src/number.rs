//! Parsing of localized numeric display strings such as `"5,3 °C"` or
//! `"Tuntuu kuin\u{a0}7,1\u{a0}°C"`.
//!
//! The number is located by pattern rather than by token position, so
//! surrounding words, units and any flavour of whitespace are ignored.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberParseError {
    #[error("No numeric value found in {input:?}")]
    NoNumber { input: String },

    #[error("Invalid numeric value {token:?} in {input:?}")]
    Invalid { input: String, token: String },
}

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Optional sign (ASCII or U+2212), digits, optional `,`/`.` fraction.
    RE.get_or_init(|| {
        Regex::new(r"(?P<sign>[+\-\x{2212}])?(?P<int>[0-9]+)(?:[.,](?P<frac>[0-9]+))?")
            .expect("number pattern is valid")
    })
}

/// Parse the first number found in `input`, accepting a comma decimal
/// separator and the Unicode minus sign.
///
/// Only ASCII digits count. Text before the number is skipped, so a
/// prefix such as `"ca. 5,3 °C"` still yields 5.3; a string with no ASCII
/// digit at all is [`NumberParseError::NoNumber`].
pub fn parse_localized_number(input: &str) -> Result<f64, NumberParseError> {
    let caps = number_regex()
        .captures(input)
        .ok_or_else(|| NumberParseError::NoNumber {
            input: input.to_string(),
        })?;

    let mut token = String::new();
    if let Some(sign) = caps.name("sign") {
        token.push(if sign.as_str() == "+" { '+' } else { '-' });
    }
    token.push_str(&caps["int"]);
    if let Some(frac) = caps.name("frac") {
        token.push('.');
        token.push_str(frac.as_str());
    }

    token.parse::<f64>().map_err(|_| NumberParseError::Invalid {
        input: input.to_string(),
        token,
    })
}
