//! Host-independent ledger logic for the Liqfinity AI (LFAI) token.
//!
//! Token semantics are written against two seams: [`storage::LedgerStorage`] for the
//! persistent slots and [`host::Host`] for the execution environment. The Stylus contract
//! implements both over hostio calls; the unit tests implement them natively in Rust.
#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod access;
pub mod errors;
pub mod events;
pub mod host;
pub mod liqfinity;
pub mod storage;
pub mod token;
pub mod treasury;

#[cfg(test)]
pub(crate) mod testing;
