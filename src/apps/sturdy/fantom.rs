//! Sturdy supply token fetcher for Fantom
//!
//! Sturdy runs Aave-V2-style markets: the data provider contract enumerates
//! reserves, and each reserve exposes a supply-side aToken that tracks the
//! underlying 1:1. Positions are therefore valued at the underlying price and
//! labeled with the current supply APY.

use alloy_primitives::{address, Address};
use anyhow::Result;
use async_trait::async_trait;

use super::APP_ID;
use crate::fetcher::{FetcherParams, PositionFetcher};
use crate::host::{PositionContract, ReserveTokenAddresses};
use crate::logger::{self, LogTag};
use crate::types::{Network, PositionToken};

/// Sturdy protocol data provider on Fantom
pub const DATA_PROVIDER_ADDRESS: Address = address!("0x7ff2520cd7b76e8c49b5db51505b842d665f3e9a");

pub struct SturdySupplyTokenFetcher {
    params: FetcherParams,
}

impl SturdySupplyTokenFetcher {
    pub fn new(params: FetcherParams) -> Self {
        Self { params }
    }

    /// Supply side of the market: the aToken, never a debt token
    fn reserve_token_address(&self, reserve: &ReserveTokenAddresses) -> Address {
        reserve.a_token
    }
}

/// Registry constructor
pub fn fetcher(params: FetcherParams) -> Box<dyn PositionFetcher> {
    Box::new(SturdySupplyTokenFetcher::new(params))
}

#[async_trait]
impl PositionFetcher for SturdySupplyTokenFetcher {
    fn app_id(&self) -> &'static str {
        APP_ID
    }

    fn group_label(&self) -> &'static str {
        "Lending"
    }

    fn network(&self) -> Network {
        self.params.network
    }

    async fn addresses(&self) -> Result<Vec<Address>> {
        let provider = self
            .params
            .contracts
            .lending_provider(DATA_PROVIDER_ADDRESS, self.network());
        let reserves = provider.reserve_tokens().await?;
        logger::debug(
            LogTag::Fetcher,
            &format!("sturdy: {} reserves enumerated", reserves.len()),
        );
        Ok(reserves
            .iter()
            .map(|reserve| self.reserve_token_address(reserve))
            .collect())
    }

    /// aTokens track their underlying 1:1, so the position is worth exactly
    /// the underlying price
    async fn price(
        &self,
        _contract: &dyn PositionContract,
        position: &PositionToken,
    ) -> Result<f64> {
        Ok(position.tokens.first().map(|token| token.price).unwrap_or(0.0))
    }

    async fn tertiary_label(&self, position: &PositionToken) -> Result<Option<String>> {
        let Some(underlying) = position.tokens.first() else {
            return Ok(None);
        };
        let provider = self
            .params
            .contracts
            .lending_provider(DATA_PROVIDER_ADDRESS, self.network());
        let apy = provider.reserve_apys(underlying.address).await?.supply_apy;
        Ok(Some(format!("{:.3}% APY", apy * 100.0)))
    }
}
