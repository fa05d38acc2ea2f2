//! Index Coop index token fetcher for Ethereum mainnet
//!
//! Index tokens are priced purely by basket composition, so the trait defaults
//! cover pricing and price-per-share. Discontinued products stay in the
//! enumeration so existing holders keep being tracked; they only differ in
//! display, where the label carries a deprecation marker.

use alloy_primitives::{address, Address};
use anyhow::Result;
use async_trait::async_trait;

use super::APP_ID;
use crate::fetcher::{FetcherParams, PositionFetcher};
use crate::logger::{self, LogTag};
use crate::types::Network;

/// Products currently offered
pub const INDEX_PRODUCTS: [Address; 7] = [
    address!("0x1494ca1f11d487c2bbe4543e90080aeba4ba3c2b"), // DPI
    address!("0x72e364f2abdc788b7e918bc238b21f109cd634d7"), // MVI
    address!("0x2af1df3ab0ab157e1e2ad8f88a7d04fbea0c7dc6"), // BED
    address!("0x7c07f7abe10ce8e33dc6c5ad68fe033085256a84"), // icETH
    address!("0xaa6e8127831c9de45ae56bb1b0d4d4da6e5665bd"), // ETH 2x Flexible Leverage
    address!("0x0b498ff89709d3838a063f1dfa463091f9801c2b"), // BTC 2x Flexible Leverage
    address!("0x341c05c0e9b33c0e38d64de76516b2ce970bb3be"), // dsETH
];

/// Discontinued products still tracked for holders
pub const DEPRECATED_PRODUCTS: [Address; 2] = [
    address!("0x33d63ba1e57e54779f7ddaeaa7109349344cf5f1"), // DATA
    address!("0x47110d43175f7f2c2425e7d15792acc5817eb44f"), // GMI
];

pub struct IndexTokenFetcher {
    params: FetcherParams,
}

impl IndexTokenFetcher {
    pub fn new(params: FetcherParams) -> Self {
        Self { params }
    }
}

/// Registry constructor
pub fn fetcher(params: FetcherParams) -> Box<dyn PositionFetcher> {
    Box::new(IndexTokenFetcher::new(params))
}

#[async_trait]
impl PositionFetcher for IndexTokenFetcher {
    fn app_id(&self) -> &'static str {
        APP_ID
    }

    fn group_label(&self) -> &'static str {
        "Index"
    }

    fn network(&self) -> Network {
        self.params.network
    }

    fn deprecated_addresses(&self) -> &[Address] {
        &DEPRECATED_PRODUCTS
    }

    async fn addresses(&self) -> Result<Vec<Address>> {
        let addresses: Vec<Address> = INDEX_PRODUCTS
            .into_iter()
            .chain(DEPRECATED_PRODUCTS)
            .collect();
        logger::debug(
            LogTag::Fetcher,
            &format!("index-coop: {} products enumerated", addresses.len()),
        );
        Ok(addresses)
    }
}
