//! Cask Protocol - subscription vault wallet tokens

pub mod avalanche;
pub mod common;

pub const APP_ID: &str = "cask-protocol";

pub use common::CaskWalletTokenFetcher;
