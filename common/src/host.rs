//! The execution environment the ledger runs in.
//!
//! Inside a Stylus program every method maps onto a hostio call. The native
//! implementation in the unit tests keeps the same state in plain Rust values.

use crate::events::LedgerEvent;
use alloc::vec::Vec;
use alloy_primitives::{Address, U256};

#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// Caller of the current invocation (`msg.sender`).
    fn sender(&self) -> Address;

    /// ETH attached to the current invocation (`msg.value`).
    fn value(&self) -> U256;

    /// Address of the running contract.
    fn this(&self) -> Address;

    /// ETH held by the running contract.
    fn eth_balance(&self) -> U256;

    /// Sends `amount` wei to `to`. This is the only external call the ledger makes.
    fn transfer_eth(&mut self, to: Address, amount: U256) -> Result<(), Vec<u8>>;

    fn emit(&mut self, event: LedgerEvent);
}
