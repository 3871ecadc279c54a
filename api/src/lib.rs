//! This crate contains all shared fullstack server functions.

#[cfg(not(target_arch = "wasm32"))]
mod eth_rpc;

use dioxus::prelude::*;
use eth_types::address::Address;
use eth_types::block_height::BlockHeight;
use eth_types::block_info::BlockInfo;
use eth_types::network::Network;
use eth_types::wei_amount::WeiAmount;

pub type ApiError = anyhow::Error;

/// The network the server-side provider client is configured for.
///
/// Doubles as the startup configuration probe: a missing API key or an
/// unsupported `ETH_NETWORK` value fails here, before any chain data is
/// requested.
#[post("/api/network")]
pub async fn network() -> Result<Network, ApiError> {
    let provider = eth_rpc::provider().await?;
    Ok(provider.network())
}

/// Current tip height of the configured chain.
#[post("/api/latest_block_number")]
pub async fn latest_block_number() -> Result<BlockHeight, ApiError> {
    let provider = eth_rpc::provider().await?;
    let height = provider.latest_block_number().await?;
    Ok(height)
}

/// The latest block, including the hashes of its transactions.
///
/// Always targets the provider's "latest" tag. The block returned may
/// already be newer than the height last reported by
/// [`latest_block_number`]; callers get a self-consistent snapshot either
/// way.
#[post("/api/latest_block")]
pub async fn latest_block() -> Result<Option<BlockInfo>, ApiError> {
    let provider = eth_rpc::provider().await?;
    let block = provider.latest_block().await?;
    Ok(block)
}

/// Balance of `address` in wei.
///
/// The address re-parses on the server, so a malformed value from any
/// client fails explicitly instead of reaching the provider.
#[post("/api/account_balance")]
pub async fn account_balance(address: Address) -> Result<WeiAmount, ApiError> {
    let provider = eth_rpc::provider().await?;
    let balance = provider.balance(&address).await?;

    let json = serde_json::to_string(&balance)?;
    dioxus_logger::tracing::info!("balance json: {}", json);

    Ok(balance)
}
