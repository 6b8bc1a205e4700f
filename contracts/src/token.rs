//! The LFAI entrypoint contract.
//!
//! Storage lives in the `sol_storage!` struct below; every external method delegates to
//! the ledger traits of `liqfinity-common` with [`StylusHost`] as the environment.

use crate::host::StylusHost;
use alloc::{string::String, vec::Vec};
use liqfinity_common::{
    access::ownable::Ownable,
    errors::TokenError,
    liqfinity::{Initializable, LiqfinityParams},
    storage::LedgerStorage,
    token::{erc20::Erc20, params::TokenParams},
    treasury::Treasury,
};
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    contract,
    prelude::*,
};

sol_storage! {
    #[entrypoint]
    pub struct LiqfinityToken {
        uint256 total_supply;
        mapping(address => uint256) balances;
        mapping(address => mapping(address => uint256)) allowances;
        address owner;
        /// Set by `init`, which replaces a constructor
        bool initialized;
    }
}

impl LedgerStorage for LiqfinityToken {
    fn get_total_supply(&self) -> U256 {
        self.total_supply.get()
    }

    fn set_total_supply(&mut self, value: U256) {
        self.total_supply.set(value);
    }

    fn get_balance(&self, account: Address) -> U256 {
        self.balances.get(account)
    }

    fn set_balance(&mut self, account: Address, value: U256) {
        self.balances.setter(account).set(value);
    }

    fn get_allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.getter(owner).get(spender)
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, value: U256) {
        self.allowances.setter(owner).insert(spender, value);
    }

    fn get_owner(&self) -> Address {
        self.owner.get()
    }

    fn set_owner(&mut self, owner: Address) {
        self.owner.set(owner);
    }

    fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    fn set_initialized(&mut self) {
        self.initialized.set(true);
    }
}

#[external]
impl LiqfinityToken {
    /// Mints the whole supply to `initial_holder` and makes it the owner. Callable once, by
    /// anyone: must run in the same transaction as the deployment.
    pub fn init(&mut self, initial_holder: Address) -> Result<(), TokenError> {
        Initializable::initialize::<LiqfinityParams, _>(self, &mut StylusHost, initial_holder)
    }

    pub fn name() -> String {
        LiqfinityParams::NAME.into()
    }

    pub fn symbol() -> String {
        LiqfinityParams::SYMBOL.into()
    }

    pub fn decimals() -> u8 {
        LiqfinityParams::DECIMALS
    }

    pub fn total_supply(&self) -> U256 {
        Erc20::total_supply(self)
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        Erc20::balance_of(self, account)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        Erc20::allowance(self, owner, spender)
    }

    pub fn owner(&self) -> Address {
        Ownable::owner(self)
    }

    /// ETH held by the contract.
    pub fn eth_balance(&self) -> U256 {
        contract::balance()
    }

    pub fn transfer(&mut self, to: Address, value: U256) -> Result<bool, TokenError> {
        Erc20::transfer(self, &mut StylusHost, to, value)
    }

    pub fn approve(&mut self, spender: Address, value: U256) -> Result<bool, TokenError> {
        Erc20::approve(self, &mut StylusHost, spender, value)
    }

    pub fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, TokenError> {
        Erc20::transfer_from(self, &mut StylusHost, from, to, value)
    }

    pub fn burn(&mut self, value: U256) -> Result<(), TokenError> {
        Erc20::burn(self, &mut StylusHost, value)
    }

    pub fn burn_from(&mut self, account: Address, value: U256) -> Result<(), TokenError> {
        Erc20::burn_from(self, &mut StylusHost, account, value)
    }

    pub fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), TokenError> {
        Ownable::transfer_ownership(self, &mut StylusHost, new_owner)
    }

    pub fn renounce_ownership(&mut self) -> Result<(), TokenError> {
        Ownable::renounce_ownership(self, &mut StylusHost)
    }

    /// Sweeps tokens sent to the contract itself. Owner only.
    pub fn withdraw_tokens(&mut self, to: Address, amount: U256) -> Result<(), TokenError> {
        Treasury::withdraw_tokens(self, &mut StylusHost, to, amount)
    }

    /// Sends ETH held by the contract. Owner only.
    #[selector(name = "withdrawETH")]
    pub fn withdraw_eth(&mut self, to: Address, amount: U256) -> Result<(), TokenError> {
        Treasury::withdraw_eth(self, &mut StylusHost, to, amount)
    }

    /// Accepts ETH from anyone. The 0.4 router has no receive hook, so payments must call
    /// this method; a plain transfer without calldata reverts.
    #[payable]
    #[selector(name = "receiveETH")]
    pub fn receive_eth(&mut self) -> Result<(), Vec<u8>> {
        Treasury::receive_eth(self, &mut StylusHost);
        Ok(())
    }
}
