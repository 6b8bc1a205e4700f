//! [`Host`] backed by Stylus hostio calls

use alloc::vec::Vec;
use liqfinity_common::{events::LedgerEvent, host::Host};
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    call, contract, evm, msg,
};

pub struct StylusHost;

impl Host for StylusHost {
    fn sender(&self) -> Address {
        msg::sender()
    }

    fn value(&self) -> U256 {
        msg::value()
    }

    fn this(&self) -> Address {
        contract::address()
    }

    fn eth_balance(&self) -> U256 {
        contract::balance()
    }

    fn transfer_eth(&mut self, to: Address, amount: U256) -> Result<(), Vec<u8>> {
        #[cfg(feature = "debug")]
        stylus_sdk::console!("transfer_eth to={} amount={}", to, amount);
        call::transfer_eth(to, amount)
    }

    fn emit(&mut self, event: LedgerEvent) {
        match event {
            LedgerEvent::Transfer(e) => evm::log(e),
            LedgerEvent::Approval(e) => evm::log(e),
            LedgerEvent::TokensWithdrawn(e) => evm::log(e),
            LedgerEvent::ETHReceived(e) => evm::log(e),
            LedgerEvent::ETHWithdrawn(e) => evm::log(e),
            LedgerEvent::OwnershipTransferred(e) => evm::log(e),
        }
    }
}
