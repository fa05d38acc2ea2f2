//! Index Coop - basket index tokens

pub mod ethereum;

pub const APP_ID: &str = "index-coop";
