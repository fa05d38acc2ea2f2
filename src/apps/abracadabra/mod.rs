//! Abracadabra Money - cauldron and staking address tables

pub mod arbitrum;

pub const APP_ID: &str = "abracadabra";
