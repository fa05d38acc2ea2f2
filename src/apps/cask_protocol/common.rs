//! Shared Cask vault wallet fetcher
//!
//! Cask deploys one vault per network; only the vault address differs between
//! deployments, so each network module just instantiates this fetcher with
//! its address.

use alloy_primitives::Address;
use anyhow::Result;
use async_trait::async_trait;

use super::APP_ID;
use crate::fetcher::{FetcherParams, PositionFetcher};
use crate::types::Network;

pub struct CaskWalletTokenFetcher {
    vault: Address,
    params: FetcherParams,
}

impl CaskWalletTokenFetcher {
    pub fn new(vault: Address, params: FetcherParams) -> Self {
        Self { vault, params }
    }

    pub fn vault(&self) -> Address {
        self.vault
    }
}

#[async_trait]
impl PositionFetcher for CaskWalletTokenFetcher {
    fn app_id(&self) -> &'static str {
        APP_ID
    }

    fn group_label(&self) -> &'static str {
        "Vaults"
    }

    fn network(&self) -> Network {
        self.params.network
    }

    async fn addresses(&self) -> Result<Vec<Address>> {
        Ok(vec![self.vault])
    }
}
