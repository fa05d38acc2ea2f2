//! Sturdy - interest-free lending markets

pub mod fantom;

pub const APP_ID: &str = "sturdy";
