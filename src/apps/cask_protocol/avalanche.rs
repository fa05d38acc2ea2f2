//! Cask Protocol vault on Avalanche

use alloy_primitives::{address, Address};

use super::common::CaskWalletTokenFetcher;
use crate::fetcher::{FetcherParams, PositionFetcher};

/// Cask vault deployment on Avalanche C-Chain
pub const CASK_VAULT_ADDRESS: Address = address!("0x3b2b4b547daeebf3a703288cb43650f0f287b9ff");

/// Registry constructor
pub fn fetcher(params: FetcherParams) -> Box<dyn PositionFetcher> {
    Box::new(CaskWalletTokenFetcher::new(CASK_VAULT_ADDRESS, params))
}
