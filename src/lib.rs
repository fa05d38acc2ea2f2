//! Per-protocol position fetcher plugins for a DeFi portfolio aggregator.
//!
//! Each app module declares, for one protocol on one network, how to enumerate
//! position contracts, derive their underlying component tokens, price a
//! position from host-supplied balances and prices, and render display labels.
//! Contract access, token resolution, and refresh scheduling are owned by the
//! host runtime; this crate defines the capability seams it plugs into.

pub mod apps;
pub mod fetcher;
pub mod host;
pub mod logger;
pub mod pricing;
pub mod types;

pub use fetcher::{FetcherParams, FetcherRegistry, PositionFetcher};
pub use types::{Network, PositionToken, TokenDefinition, UnderlyingToken};
