//! Core data model shared by all fetchers
//!
//! Everything here is either an identifier or a read-only snapshot supplied by
//! the host when it resolves a position for a refresh cycle. Fetchers never
//! mutate these values.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

// =============================================================================
// NETWORKS
// =============================================================================

/// EVM networks the fetchers in this crate are deployed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Ethereum,
    Arbitrum,
    Avalanche,
    Fantom,
    Optimism,
    Polygon,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Ethereum => "ethereum",
            Network::Arbitrum => "arbitrum",
            Network::Avalanche => "avalanche",
            Network::Fantom => "fantom",
            Network::Optimism => "optimism",
            Network::Polygon => "polygon",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TOKEN REFERENCES
// =============================================================================

/// Identifier for a component token, before the host has resolved it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenDefinition {
    pub address: Address,
    pub network: Network,
}

/// A component token the host has resolved: decimals and current price are
/// supplied externally and consumed read-only by pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderlyingToken {
    pub address: Address,
    pub network: Network,
    pub decimals: u8,
    pub price: f64,
}

/// A position contract the host has resolved into a displayable wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionToken {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
    /// Underlying component tokens, in the order the contract reports them
    pub tokens: Vec<UnderlyingToken>,
}

// =============================================================================
// UNIT SCALING
// =============================================================================

/// Convert a raw on-chain balance into a token amount.
///
/// Values outside f64 precision degrade gracefully; portfolio valuation is
/// display math, not settlement math.
pub fn scale_raw_units(raw: U256, decimals: u8) -> f64 {
    let amount: f64 = raw.to_string().parse().unwrap_or(0.0);
    amount / 10f64.powi(decimals as i32)
}
