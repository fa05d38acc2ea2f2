//! Explicit fetcher registry
//!
//! Maps `(app id, network)` to a fetcher constructor. The registry is built at
//! process start and handed to the host orchestrator; there is no implicit
//! global registration. `with_defaults` wires up every app this crate ships.

use std::collections::HashMap;

use crate::apps;
use crate::fetcher::{FetcherParams, PositionFetcher};
use crate::logger::{self, LogTag};
use crate::types::Network;

/// Constructs a fetcher from host-supplied dependencies
pub type FetcherCtor = fn(FetcherParams) -> Box<dyn PositionFetcher>;

#[derive(Default)]
pub struct FetcherRegistry {
    entries: HashMap<(&'static str, Network), FetcherCtor>,
}

impl FetcherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry populated with every fetcher this crate ships
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            apps::index_coop::APP_ID,
            Network::Ethereum,
            apps::index_coop::ethereum::fetcher,
        );
        registry.register(
            apps::cask_protocol::APP_ID,
            Network::Avalanche,
            apps::cask_protocol::avalanche::fetcher,
        );
        registry.register(
            apps::sturdy::APP_ID,
            Network::Fantom,
            apps::sturdy::fantom::fetcher,
        );
        registry
    }

    /// Register a constructor. Re-registering the same key replaces the
    /// previous entry with a warning.
    pub fn register(&mut self, app_id: &'static str, network: Network, ctor: FetcherCtor) {
        if self.entries.insert((app_id, network), ctor).is_some() {
            logger::warning(
                LogTag::Registry,
                &format!("replaced fetcher registration for {} on {}", app_id, network),
            );
        } else {
            logger::debug(
                LogTag::Registry,
                &format!("registered fetcher {} on {}", app_id, network),
            );
        }
    }

    pub fn contains(&self, app_id: &str, network: Network) -> bool {
        self.entries
            .keys()
            .any(|(id, net)| *id == app_id && *net == network)
    }

    pub fn get(&self, app_id: &str, network: Network) -> Option<FetcherCtor> {
        self.entries
            .iter()
            .find(|((id, net), _)| *id == app_id && *net == network)
            .map(|(_, ctor)| *ctor)
    }

    /// Construct the fetcher registered for `(app_id, network)`.
    ///
    /// The registration key decides the network; a mismatching network in
    /// `params` is overridden so a fetcher can never be built against the
    /// wrong chain.
    pub fn instantiate(
        &self,
        app_id: &str,
        network: Network,
        params: &FetcherParams,
    ) -> Option<Box<dyn PositionFetcher>> {
        let ctor = self.get(app_id, network)?;
        let params = FetcherParams {
            network,
            contracts: params.contracts.clone(),
            tokens: params.tokens.clone(),
        };
        Some(ctor(params))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Network, FetcherCtor)> + '_ {
        self.entries
            .iter()
            .map(|((app_id, network), ctor)| (*app_id, *network, *ctor))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use alloy_primitives::{Address, U256};
    use anyhow::Result;
    use async_trait::async_trait;

    use crate::host::{
        ContractFactory, LendingDataProvider, PositionContract, ReserveApyData,
        ReserveTokenAddresses, TokenResolver,
    };
    use crate::types::UnderlyingToken;

    struct NullContract(Address);

    #[async_trait]
    impl PositionContract for NullContract {
        fn address(&self) -> Address {
            self.0
        }

        async fn underlying_components(&self) -> Result<Vec<Address>> {
            Ok(vec![])
        }

        async fn component_units(&self, _component: Address) -> Result<Option<U256>> {
            Ok(None)
        }
    }

    struct NullProvider;

    #[async_trait]
    impl LendingDataProvider for NullProvider {
        async fn reserve_tokens(&self) -> Result<Vec<ReserveTokenAddresses>> {
            Ok(vec![])
        }

        async fn reserve_apys(&self, _underlying: Address) -> Result<ReserveApyData> {
            Ok(ReserveApyData {
                supply_apy: 0.0,
                variable_borrow_apy: 0.0,
            })
        }
    }

    struct NullFactory;

    impl ContractFactory for NullFactory {
        fn position_contract(
            &self,
            address: Address,
            _network: Network,
        ) -> Arc<dyn PositionContract> {
            Arc::new(NullContract(address))
        }

        fn lending_provider(
            &self,
            _address: Address,
            _network: Network,
        ) -> Arc<dyn LendingDataProvider> {
            Arc::new(NullProvider)
        }
    }

    struct NullResolver;

    #[async_trait]
    impl TokenResolver for NullResolver {
        async fn resolve(&self, address: Address, network: Network) -> Result<UnderlyingToken> {
            Ok(UnderlyingToken {
                address,
                network,
                decimals: 18,
                price: 0.0,
            })
        }
    }

    fn params(network: Network) -> FetcherParams {
        FetcherParams {
            network,
            contracts: Arc::new(NullFactory),
            tokens: Arc::new(NullResolver),
        }
    }

    #[test]
    fn test_defaults_cover_shipped_apps() {
        let registry = FetcherRegistry::with_defaults();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("index-coop", Network::Ethereum));
        assert!(registry.contains("cask-protocol", Network::Avalanche));
        assert!(registry.contains("sturdy", Network::Fantom));
        assert!(!registry.contains("index-coop", Network::Fantom));
    }

    #[test]
    fn test_instantiate_builds_matching_fetcher() {
        let registry = FetcherRegistry::with_defaults();
        let fetcher = registry
            .instantiate("index-coop", Network::Ethereum, &params(Network::Ethereum))
            .unwrap();
        assert_eq!(fetcher.app_id(), "index-coop");
        assert_eq!(fetcher.network(), Network::Ethereum);
    }

    #[test]
    fn test_instantiate_pins_network_from_key() {
        let registry = FetcherRegistry::with_defaults();
        // Params claim Polygon; the registration key must win.
        let fetcher = registry
            .instantiate("sturdy", Network::Fantom, &params(Network::Polygon))
            .unwrap();
        assert_eq!(fetcher.network(), Network::Fantom);
    }

    #[test]
    fn test_unknown_app_yields_none() {
        let registry = FetcherRegistry::with_defaults();
        assert!(registry
            .instantiate("no-such-app", Network::Ethereum, &params(Network::Ethereum))
            .is_none());
    }

    #[test]
    fn test_reregistration_replaces_entry() {
        let mut registry = FetcherRegistry::new();
        registry.register("index-coop", Network::Ethereum, apps::index_coop::ethereum::fetcher);
        registry.register("index-coop", Network::Ethereum, apps::index_coop::ethereum::fetcher);
        assert_eq!(registry.len(), 1);
    }
}
