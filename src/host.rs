//! Capability seams toward the host runtime
//!
//! The host owns contract ABI access, RPC transport, and token resolution.
//! Fetchers only ever see these traits; concrete implementations live with the
//! host orchestrator. Call failures propagate as `anyhow::Error` - no retry or
//! timeout logic belongs at this layer.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use anyhow::Result;
use async_trait::async_trait;

use crate::types::{Network, UnderlyingToken};

/// A live, callable handle to one position contract
#[async_trait]
pub trait PositionContract: Send + Sync {
    fn address(&self) -> Address;

    /// Component token addresses that make up this position
    async fn underlying_components(&self) -> Result<Vec<Address>>;

    /// Raw units of `component` backing one whole position supply.
    ///
    /// `None` means the contract reports no usable balance for this component;
    /// pricing treats that as a zero contribution rather than a failure.
    async fn component_units(&self, component: Address) -> Result<Option<U256>>;
}

/// Reserve token addresses as reported by an Aave-V2-style data provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveTokenAddresses {
    pub underlying: Address,
    pub a_token: Address,
    pub stable_debt_token: Address,
    pub variable_debt_token: Address,
}

/// Current reserve rates as reported by an Aave-V2-style data provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReserveApyData {
    pub supply_apy: f64,
    pub variable_borrow_apy: f64,
}

/// A live handle to a lending protocol's data provider contract
#[async_trait]
pub trait LendingDataProvider: Send + Sync {
    async fn reserve_tokens(&self) -> Result<Vec<ReserveTokenAddresses>>;

    async fn reserve_apys(&self, underlying: Address) -> Result<ReserveApyData>;
}

/// Resolves an address into a typed, callable contract handle
pub trait ContractFactory: Send + Sync {
    fn position_contract(&self, address: Address, network: Network) -> Arc<dyn PositionContract>;

    fn lending_provider(&self, address: Address, network: Network) -> Arc<dyn LendingDataProvider>;
}

/// Supplies decimals and current price for any token address a fetcher asks for
#[async_trait]
pub trait TokenResolver: Send + Sync {
    async fn resolve(&self, address: Address, network: Network) -> Result<UnderlyingToken>;
}
