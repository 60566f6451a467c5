//! `--name=value` token handling shared by every command parser.
//!
//! A command parser classifies each token with [`classify`], then converts
//! option values with the typed parsers below. The same per-token step is
//! reused when a persisted sketch header is read back.

use crate::constants::{COMMENT_KEY, HELP_PREFIX, OPTION_PREFIX};
use crate::error::Error;
use std::str::FromStr;

/// One command-line token after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Anything starting with `--help`.
    Help,
    /// `--COMMENT=...`, always ignored.
    Comment,
    /// A token whose key does not start with `--`; kept whole.
    Positional(&'a str),
    /// `--name` or `--name=value`.
    Option {
        /// Text before the first `=`.
        key: &'a str,
        /// Text after the first `=`, if there was one.
        value: Option<&'a str>,
    },
}

/// Classify a single token.
pub fn classify(arg: &str) -> Token<'_> {
    if arg.starts_with(HELP_PREFIX) {
        return Token::Help;
    }

    let (key, value) = match arg.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (arg, None),
    };

    if key == COMMENT_KEY {
        Token::Comment
    } else if !key.starts_with(OPTION_PREFIX) {
        Token::Positional(arg)
    } else {
        Token::Option { key, value }
    }
}

/// Failure to apply one token to a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    /// The token asks for usage text.
    #[error("usage requested")]
    HelpRequested,

    /// The option name is not known to this command.
    #[error("unrecognized option: {token}")]
    Unrecognized {
        /// The offending token.
        token: String,
    },

    /// The option is known but its value is missing or malformed.
    #[error("option without valid value: {token} ({reason})")]
    InvalidValue {
        /// The offending token.
        token: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl OptionError {
    /// Build an [`OptionError::Unrecognized`] for `token`.
    pub fn unrecognized(token: &str) -> Self {
        Self::Unrecognized {
            token: token.to_string(),
        }
    }

    /// Returns a closure wrapping a value-parser message for `token`.
    pub fn invalid(token: &str) -> impl FnOnce(String) -> Self + '_ {
        move |reason| Self::InvalidValue {
            token: token.to_string(),
            reason,
        }
    }

    /// Attach the command name, producing the crate-level error.
    pub fn into_error(self, command: &'static str) -> Error {
        match self {
            Self::HelpRequested => Error::UsageRequested { command },
            Self::Unrecognized { token } => Error::UnrecognizedOption { command, token },
            Self::InvalidValue { token, reason } => Error::InvalidValue {
                command,
                token,
                reason,
            },
        }
    }
}

/// Return the value, rejecting a missing `=` or an empty value.
pub fn require_value(value: Option<&str>) -> Result<&str, String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err("missing value".to_string()),
    }
}

/// Take a string value verbatim; a missing value is the empty string.
///
/// Line breaks are rejected since every persisted value must fit on one
/// header line.
pub fn parse_string(value: Option<&str>) -> Result<String, String> {
    let value = value.unwrap_or_default();
    check_single_line(value)?;
    Ok(value.to_string())
}

/// Reject values containing `\n` or `\r`.
pub fn check_single_line(value: &str) -> Result<(), String> {
    if value.contains(['\n', '\r']) {
        return Err(format!("{value:?} contains a line break"));
    }
    Ok(())
}

/// Parse a numeric value of any `FromStr` type.
pub fn parse_number<T>(value: Option<&str>) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = require_value(value)?;
    s.parse()
        .map_err(|e| format!("'{s}' is not a valid {}: {e}", short_type_name::<T>()))
}

/// Parse an integer that must be at least 1.
pub fn parse_positive<T>(value: Option<&str>) -> Result<T, String>
where
    T: FromStr + PartialOrd + From<u8> + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    let parsed: T = parse_number(value)?;
    if parsed < T::from(1) {
        return Err(format!("must be a positive integer, got {parsed}"));
    }
    Ok(parsed)
}

/// Parse a boolean given as the literal `true` or `false`.
pub fn parse_bool(value: Option<&str>) -> Result<bool, String> {
    match require_value(value)? {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("'{other}' is not 'true' or 'false'")),
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
