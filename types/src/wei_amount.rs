//! Arbitrary-precision wei amounts and the ether display rules.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Decimal places between wei and ether.
const ETH_DECIMALS: usize = 18;

/// Balance display width, counted in characters of the decimal ether
/// string.
pub const BALANCE_DISPLAY_CHARS: usize = 5;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid wei amount: expected an unsigned decimal integer")]
pub struct ParseWeiAmountError;

/// A balance in wei, the chain's smallest currency unit.
///
/// Backed by an unbounded integer; the wire format is a decimal string so
/// the value survives serde on every target without precision loss.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeiAmount(BigUint);

impl WeiAmount {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Parses a decimal integer string, the form balances arrive in.
    pub fn from_dec_str(s: &str) -> Result<Self, ParseWeiAmountError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseWeiAmountError);
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or(ParseWeiAmountError)
    }

    /// Builds an amount from big-endian bytes, the form provider-side
    /// 256-bit integers expose losslessly.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    /// The full decimal ether string: whole part, a dot, and the fraction
    /// with trailing zeros removed but at least one digit kept.
    ///
    /// `2500000000000000000` wei becomes `"2.5"`; zero becomes `"0.0"`.
    pub fn to_eth_string(&self) -> String {
        let base = BigUint::from(10u8).pow(ETH_DECIMALS as u32);
        let whole = &self.0 / &base;
        let frac = &self.0 % &base;

        let mut frac_str = format!("{:0>width$}", frac.to_string(), width = ETH_DECIMALS);
        while frac_str.len() > 1 && frac_str.ends_with('0') {
            frac_str.pop();
        }
        format!("{whole}.{frac_str}")
    }

    /// The truncated balance shown in the UI: the first
    /// [`BALANCE_DISPLAY_CHARS`] characters of the ether string, minus any
    /// dangling dot.
    ///
    /// `"1.234567..."` displays as `"1.234"`; `"2.5"` is short enough to
    /// stay whole; `"12345.6"` loses its entire fraction and the dot.
    pub fn display_truncated(&self) -> String {
        let full = self.to_eth_string();
        let mut out: String = full.chars().take(BALANCE_DISPLAY_CHARS).collect();
        if out.ends_with('.') {
            out.pop();
        }
        out
    }
}

impl From<u128> for WeiAmount {
    fn from(wei: u128) -> Self {
        Self(BigUint::from(wei))
    }
}

impl FromStr for WeiAmount {
    type Err = ParseWeiAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dec_str(s)
    }
}

impl TryFrom<String> for WeiAmount {
    type Error = ParseWeiAmountError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_dec_str(&s)
    }
}

impl From<WeiAmount> for String {
    fn from(amount: WeiAmount) -> Self {
        amount.0.to_string()
    }
}

/// Displays as the raw wei integer, matching the provider's
/// "integer-as-string" shape. Ether conversion is always explicit.
impl fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(s: &str) -> WeiAmount {
        WeiAmount::from_dec_str(s).unwrap()
    }

    #[test]
    fn two_and_a_half_eth_formats_without_padding() {
        let amount = wei("2500000000000000000");
        assert_eq!(amount.to_eth_string(), "2.5");
        assert_eq!(amount.display_truncated(), "2.5");
    }

    #[test]
    fn long_fractions_truncate_to_five_chars() {
        let amount = wei("1234567891234567890");
        assert_eq!(amount.to_eth_string(), "1.23456789123456789");
        assert_eq!(amount.display_truncated(), "1.234");
    }

    #[test]
    fn sub_ether_balances_keep_the_leading_zero() {
        let amount = wei("123456789012345678");
        assert_eq!(amount.to_eth_string(), "0.123456789012345678");
        assert_eq!(amount.display_truncated(), "0.123");
    }

    #[test]
    fn one_wei_truncates_to_apparent_zero() {
        let amount = wei("1");
        assert_eq!(amount.to_eth_string(), "0.000000000000000001");
        assert_eq!(amount.display_truncated(), "0.000");
    }

    #[test]
    fn zero_displays_with_one_fraction_digit() {
        assert_eq!(WeiAmount::zero().to_eth_string(), "0.0");
        assert_eq!(WeiAmount::zero().display_truncated(), "0.0");
    }

    #[test]
    fn whole_ether_keeps_one_fraction_digit() {
        let amount = wei("1000000000000000000");
        assert_eq!(amount.to_eth_string(), "1.0");
        assert_eq!(amount.display_truncated(), "1.0");
    }

    #[test]
    fn large_whole_parts_drop_the_dangling_dot() {
        // 12345.6 ether: five characters in is exactly the dot.
        let amount = wei("12345600000000000000000");
        assert_eq!(amount.to_eth_string(), "12345.6");
        assert_eq!(amount.display_truncated(), "12345");
    }

    #[test]
    fn rejects_non_decimal_input() {
        assert!(WeiAmount::from_dec_str("").is_err());
        assert!(WeiAmount::from_dec_str("-5").is_err());
        assert!(WeiAmount::from_dec_str("12a3").is_err());
        assert!(WeiAmount::from_dec_str("0x12").is_err());
    }

    #[test]
    fn values_beyond_u128_survive() {
        // 2^130, comfortably past what a machine word pair can hold.
        let s = "1361129467683753853853498429727072845824";
        assert_eq!(String::from(wei(s)), s);
    }

    #[test]
    fn from_be_bytes_matches_decimal_parsing() {
        let amount = WeiAmount::from_be_bytes(&[0x09, 0x18, 0x4e, 0x72, 0xa0, 0x00]);
        assert_eq!(amount, wei("10000000000000"));
    }

    #[test]
    fn serde_uses_the_decimal_wei_string() {
        let amount = wei("2500000000000000000");
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"2500000000000000000\"");
        assert_eq!(serde_json::from_str::<WeiAmount>(&json).unwrap(), amount);
        assert!(serde_json::from_str::<WeiAmount>("\"1.5\"").is_err());
    }
}
