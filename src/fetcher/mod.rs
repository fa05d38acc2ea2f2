//! The position fetcher capability interface
//!
//! One `PositionFetcher` per protocol per network. The host drives the whole
//! flow: it enumerates addresses, resolves each into a live contract and a
//! `PositionToken` wrapper, then calls the pricing and labeling methods per
//! wrapper. Fetchers hold no per-call mutable state, only the dependencies
//! injected through `FetcherParams` at construction.

pub mod registry;

use std::sync::Arc;

use alloy_primitives::Address;
use anyhow::Result;
use async_trait::async_trait;

use crate::host::{ContractFactory, PositionContract, TokenResolver};
use crate::pricing::basket_price;
use crate::types::{Network, PositionToken, TokenDefinition};

pub use registry::{FetcherCtor, FetcherRegistry};

/// Suffix appended to labels of positions that are still tracked but no
/// longer offered by the protocol
pub const DEPRECATED_LABEL_SUFFIX: &str = " (deprecated)";

/// Host-supplied dependencies, fixed at fetcher construction
#[derive(Clone)]
pub struct FetcherParams {
    pub network: Network,
    pub contracts: Arc<dyn ContractFactory>,
    pub tokens: Arc<dyn TokenResolver>,
}

/// Per-protocol, per-network position fetcher.
///
/// Default methods cover the common basket-token case: price is the sum of
/// underlying component liquidity, share value equals nominal value, and the
/// label is the position symbol with a deprecation marker where applicable.
#[async_trait]
pub trait PositionFetcher: Send + Sync {
    /// Stable protocol identifier, matching the registry key
    fn app_id(&self) -> &'static str;

    /// Display category for the host UI
    fn group_label(&self) -> &'static str;

    fn network(&self) -> Network;

    /// Positions the protocol no longer offers but existing holders of which
    /// must keep being tracked and valued
    fn deprecated_addresses(&self) -> &[Address] {
        &[]
    }

    /// The finite set of position contract addresses, deprecated entries
    /// included
    async fn addresses(&self) -> Result<Vec<Address>>;

    /// Component token identifiers for one position contract. Contract call
    /// failures propagate to the host.
    async fn underlying_token_definitions(
        &self,
        contract: &dyn PositionContract,
    ) -> Result<Vec<TokenDefinition>> {
        let components = contract.underlying_components().await?;
        Ok(components
            .into_iter()
            .map(|address| TokenDefinition {
                address,
                network: self.network(),
            })
            .collect())
    }

    /// Value of one whole position token
    async fn price(
        &self,
        contract: &dyn PositionContract,
        position: &PositionToken,
    ) -> Result<f64> {
        basket_price(contract, position).await
    }

    /// Share-to-asset conversion factors. Basket positions have none, so the
    /// default is a single unit entry.
    async fn price_per_share(
        &self,
        _contract: &dyn PositionContract,
        _position: &PositionToken,
    ) -> Result<Vec<f64>> {
        Ok(vec![1.0])
    }

    /// Human-readable label, flagging deprecated positions distinctly
    async fn label(&self, position: &PositionToken) -> Result<String> {
        if self.deprecated_addresses().contains(&position.address) {
            Ok(format!("{}{}", position.symbol, DEPRECATED_LABEL_SUFFIX))
        } else {
            Ok(position.symbol.clone())
        }
    }

    /// Optional extra display line (rates, fees), rendered under the label
    async fn tertiary_label(&self, _position: &PositionToken) -> Result<Option<String>> {
        Ok(None)
    }
}
