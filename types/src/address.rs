//! Account address parsing and display.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// An error that can occur when parsing a string into an [`Address`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseAddressError {
    /// The string does not start with `0x`.
    #[error("address must start with 0x")]
    MissingPrefix,
    /// The hex part is not exactly 40 digits.
    #[error("address must have 40 hex digits, found {0}")]
    WrongLength(usize),
    /// The hex part contains a character outside `[0-9a-fA-F]`.
    #[error("address contains a non-hex character")]
    InvalidHexDigit,
}

/// An Ethereum account address, held as its lowercase `0x`-prefixed hex
/// form.
///
/// Parsing validates shape only; whether the account exists is for the
/// chain provider to decide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Hex digits in the canonical form, excluding the `0x` prefix.
    pub const HEX_DIGITS: usize = 40;

    /// The `0x`-prefixed lowercase hex form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds an address from the raw 20 bytes a provider payload carries.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        let mut s = String::with_capacity(2 + Self::HEX_DIGITS);
        s.push_str("0x");
        for byte in bytes {
            let _ = write!(s, "{byte:02x}");
        }
        Self(s)
    }

    /// Abbreviated form for tight layouts, e.g. `0x1234...abcd`.
    pub fn abbreviated(&self) -> String {
        format!("{}...{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(ParseAddressError::MissingPrefix)?;
        if hex.len() != Self::HEX_DIGITS {
            return Err(ParseAddressError::WrongLength(hex.len()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseAddressError::InvalidHexDigit);
        }
        Ok(Self(format!("0x{}", hex.to_ascii_lowercase())))
    }
}

impl TryFrom<String> for Address {
    type Error = ParseAddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
