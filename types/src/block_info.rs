use serde::Deserialize;
use serde::Serialize;

use crate::address::Address;
use crate::block_height::BlockHeight;
use crate::timestamp::Timestamp;
use crate::wei_amount::WeiAmount;

/// A snapshot of one block together with the hashes of its transactions.
///
/// Fields mirror what the provider reports for a block-by-number query.
/// Anything a network or block type can omit is an `Option`; the UI
/// renders a blank for those. A snapshot is replaced wholesale on every
/// refresh, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub hash: Option<String>,
    pub parent_hash: String,
    pub height: Option<BlockHeight>,
    pub timestamp: Timestamp,
    pub nonce: Option<String>,
    /// Decimal string; zero on post-merge blocks.
    pub difficulty: String,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub miner: Address,
    /// `0x`-prefixed hex of the raw extra-data bytes.
    pub extra_data: String,
    pub base_fee_per_gas: Option<WeiAmount>,
    /// In payload order; only hashes are carried.
    pub transactions: Vec<TxSummary>,
}

impl BlockInfo {
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }
}

/// The one transaction field this application consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxSummary {
    pub hash: String,
}
