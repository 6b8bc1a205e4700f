//! Fungible token bookkeeping

pub mod erc20;
pub mod params;
