//! Owner-only sweeping of tokens and ETH held by the contract, and the ETH receive hook.

use crate::access::ownable::Ownable;
use crate::errors::{
    ETHTransferFailed, InsufficientETHBalance, InsufficientTokenBalance, TokenError, ZeroAddress,
    ZeroAmount,
};
use crate::events::{ETHReceived, ETHWithdrawn, TokensWithdrawn};
use crate::host::Host;
use crate::token::erc20::Erc20;
use alloy_primitives::{Address, U256};

pub trait Treasury: Erc20 + Ownable {
    /// Sends `amount` of the contract's own tokens to `to`.
    ///
    /// Emits a {Transfer} and a {TokensWithdrawn} event.
    fn withdraw_tokens<H: Host>(
        &mut self,
        host: &mut H,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.only_owner(host)?;
        if to.is_zero() {
            return Err(TokenError::ZeroAddress(ZeroAddress {}));
        }
        if amount.is_zero() {
            return Err(TokenError::ZeroAmount(ZeroAmount {}));
        }
        let this = host.this();
        let balance = self.get_balance(this);
        if balance < amount {
            return Err(TokenError::InsufficientTokenBalance(InsufficientTokenBalance {
                balance,
                needed: amount,
            }));
        }
        self._transfer(host, this, to, amount)?;
        host.emit(TokensWithdrawn { to, amount }.into());
        Ok(())
    }

    /// Sends `amount` wei held by the contract to `to`.
    ///
    /// All checks run before the transfer and no storage is written, so a reentrant call
    /// made from the recipient sees the already reduced ETH balance. The event is logged
    /// only once the transfer went through.
    ///
    /// Emits an {ETHWithdrawn} event.
    fn withdraw_eth<H: Host>(
        &mut self,
        host: &mut H,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.only_owner(host)?;
        if to.is_zero() {
            return Err(TokenError::ZeroAddress(ZeroAddress {}));
        }
        let balance = host.eth_balance();
        if balance < amount {
            return Err(TokenError::InsufficientETHBalance(InsufficientETHBalance {
                balance,
                needed: amount,
            }));
        }
        host.transfer_eth(to, amount)
            .map_err(|_| TokenError::ETHTransferFailed(ETHTransferFailed { to, amount }))?;
        host.emit(ETHWithdrawn { to, amount }.into());
        Ok(())
    }

    /// Accepts the ETH attached to the call.
    ///
    /// Emits an {ETHReceived} event.
    fn receive_eth<H: Host>(&mut self, host: &mut H) {
        let sender = host.sender();
        let amount = host.value();
        host.emit(ETHReceived { sender, amount }.into());
    }
}

impl<S: Erc20 + Ownable + ?Sized> Treasury for S {}
