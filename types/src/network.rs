//! The chain/network selector for the provider endpoint.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown network name: {0}")]
pub struct ParseNetworkError(String);

/// Which chain the provider is queried against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIs,
)]
pub enum Network {
    #[default]
    Mainnet,
    Sepolia,
    Holesky,
}

impl Network {
    fn subdomain(&self) -> &'static str {
        match self {
            Network::Mainnet => "eth-mainnet",
            Network::Sepolia => "eth-sepolia",
            Network::Holesky => "eth-holesky",
        }
    }

    /// The provider's JSON-RPC endpoint for this network.
    pub fn provider_url(&self, api_key: &str) -> String {
        format!("https://{}.g.alchemy.com/v2/{}", self.subdomain(), api_key)
    }

    /// Ticker of the network's native currency.
    pub fn currency_code(&self) -> &'static str {
        "ETH"
    }
}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "eth-mainnet" => Ok(Network::Mainnet),
            "sepolia" | "eth-sepolia" => Ok(Network::Sepolia),
            "holesky" | "eth-holesky" => Ok(Network::Holesky),
            _ => Err(ParseNetworkError(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Sepolia => "sepolia",
            Network::Holesky => "holesky",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("eth-sepolia".parse::<Network>().unwrap(), Network::Sepolia);
        assert_eq!("HOLESKY".parse::<Network>().unwrap(), Network::Holesky);
        assert!("goerli".parse::<Network>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for network in [Network::Mainnet, Network::Sepolia, Network::Holesky] {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
    }

    #[test]
    fn provider_url_embeds_network_and_key() {
        assert_eq!(
            Network::Mainnet.provider_url("demo-key"),
            "https://eth-mainnet.g.alchemy.com/v2/demo-key"
        );
        assert_eq!(
            Network::Sepolia.provider_url("k"),
            "https://eth-sepolia.g.alchemy.com/v2/k"
        );
    }
}
