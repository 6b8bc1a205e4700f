//! Persistent slots backing the ledger.

use alloy_primitives::{Address, U256};

/// Raw reads and writes of the ledger's storage. No validation happens at this level;
/// the token, ownership and treasury traits are implemented on top of it.
pub trait LedgerStorage {
    fn get_total_supply(&self) -> U256;
    fn set_total_supply(&mut self, value: U256);

    fn get_balance(&self, account: Address) -> U256;
    fn set_balance(&mut self, account: Address, value: U256);

    fn get_allowance(&self, owner: Address, spender: Address) -> U256;
    fn set_allowance(&mut self, owner: Address, spender: Address, value: U256);

    fn get_owner(&self) -> Address;
    fn set_owner(&mut self, owner: Address);

    fn is_initialized(&self) -> bool;
    fn set_initialized(&mut self);
}
