use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A block height on the chain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct BlockHeight(u64);

impl BlockHeight {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        Self(height)
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_order_by_value() {
        assert!(BlockHeight::from(17_000_000) < BlockHeight::from(17_000_001));
    }

    #[test]
    fn display_is_the_plain_number() {
        assert_eq!(BlockHeight::from(17_000_000).to_string(), "17000000");
    }
}
