//! Server-side adapter around the external JSON-RPC provider.
//!
//! Transport concerns (framing, pooling, retries) live in the `web3`
//! crate; this module owns configuration and the mapping from provider
//! payloads to the crate-local types the UI consumes.

use std::str::FromStr;

use anyhow::Context;
use eth_types::address::Address;
use eth_types::block_height::BlockHeight;
use eth_types::block_info::BlockInfo;
use eth_types::block_info::TxSummary;
use eth_types::network::Network;
use eth_types::timestamp::Timestamp;
use eth_types::wei_amount::WeiAmount;
use thiserror::Error;
use tokio::sync::OnceCell;
use web3::transports::Http;
use web3::types::Block;
use web3::types::BlockId;
use web3::types::BlockNumber;
use web3::types::Transaction;
use web3::types::H160;
use web3::types::U256;
use web3::Web3;

use crate::ApiError;

/// Environment variable holding the provider API key. Required.
const API_KEY_VAR: &str = "ALCHEMY_API_KEY";
/// Environment variable selecting the network. Optional, defaults to
/// mainnet.
const NETWORK_VAR: &str = "ETH_NETWORK";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ALCHEMY_API_KEY environment variable is not set")]
    MissingApiKey,
    #[error("ETH_NETWORK names an unsupported network: {0}")]
    UnsupportedNetwork(String),
}

/// Handle to the configured provider endpoint.
pub struct EthProvider {
    network: Network,
    web3: Web3<Http>,
}

impl EthProvider {
    /// Reads the environment and builds the client. Runs once per process
    /// via [`provider`].
    fn from_env() -> Result<Self, ApiError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)?;
        let network = match std::env::var(NETWORK_VAR) {
            Ok(name) => {
                Network::from_str(&name).map_err(|_| ConfigError::UnsupportedNetwork(name))?
            }
            Err(_) => Network::default(),
        };

        let transport = Http::new(&network.provider_url(&api_key))
            .context("failed to set up the provider transport")?;
        Ok(Self {
            network,
            web3: Web3::new(transport),
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub async fn latest_block_number(&self) -> Result<BlockHeight, ApiError> {
        let number = self
            .web3
            .eth()
            .block_number()
            .await
            .context("tip height fetch failed")?;
        Ok(BlockHeight::from(number.as_u64()))
    }

    pub async fn latest_block(&self) -> Result<Option<BlockInfo>, ApiError> {
        let block = self
            .web3
            .eth()
            .block_with_txs(BlockId::Number(BlockNumber::Latest))
            .await
            .context("latest block fetch failed")?;
        Ok(block.map(block_info_from))
    }

    pub async fn balance(&self, address: &Address) -> Result<WeiAmount, ApiError> {
        let account =
            H160::from_str(address.as_str()).context("account address rejected by provider types")?;
        let raw = self
            .web3
            .eth()
            .balance(account, None)
            .await
            .context("balance fetch failed")?;
        Ok(wei_from_u256(raw))
    }
}

/// Process-wide provider handle, configured once from the environment.
pub async fn provider() -> Result<&'static EthProvider, ApiError> {
    static PROVIDER: OnceCell<EthProvider> = OnceCell::const_new();
    PROVIDER
        .get_or_try_init(|| async { EthProvider::from_env() })
        .await
}

fn wei_from_u256(value: U256) -> WeiAmount {
    let mut buf = [0u8; 32];
    value.to_big_endian(&mut buf);
    WeiAmount::from_be_bytes(&buf)
}

fn block_info_from(block: Block<Transaction>) -> BlockInfo {
    BlockInfo {
        hash: block.hash.map(|h| format!("{h:#x}")),
        parent_hash: format!("{:#x}", block.parent_hash),
        height: block.number.map(|n| BlockHeight::from(n.as_u64())),
        timestamp: Timestamp::from_secs(block.timestamp.as_u64()),
        nonce: block.nonce.map(|n| format!("{n:#x}")),
        difficulty: block.difficulty.to_string(),
        gas_limit: block.gas_limit.as_u64(),
        gas_used: block.gas_used.as_u64(),
        miner: Address::from_bytes(block.author.to_fixed_bytes()),
        extra_data: format!("0x{}", hex::encode(&block.extra_data.0)),
        base_fee_per_gas: block.base_fee_per_gas.map(wei_from_u256),
        transactions: block
            .transactions
            .iter()
            .map(|tx| TxSummary {
                hash: format!("{:#x}", tx.hash),
            })
            .collect(),
    }
}
