//! Per-protocol fetcher plugins and address tables
//!
//! One module per protocol, one submodule per network deployment, mirroring
//! how the protocols themselves ship.

pub mod abracadabra;
pub mod cask_protocol;
pub mod index_coop;
pub mod sturdy;
