//! Liqfinity AI (LFAI) token contract for Stylus
//!
//! Deployment: Stylus 0.4 programs have no constructor, so the supply is minted by a
//! separate `init(address)` call that the first caller wins. Deploy, activate and call
//! `init` in a single transaction (a factory or multicall deployer) so nobody can
//! initialize the token in between.
//!
//! ETH: the 0.4 router rejects calls without a selector, so plain value transfers to the
//! contract revert. Payments must call the payable `receiveETH()`.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main, no_std)]
extern crate alloc;

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: mini_alloc::MiniAlloc = mini_alloc::MiniAlloc::INIT;

mod host;
pub mod token;
