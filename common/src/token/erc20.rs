//! ERC20 balances and allowances, with the burnable extension.
//! Error names follow the OpenZeppelin 5.x ERC20 custom errors.

use crate::errors::{
    ERC20InsufficientAllowance, ERC20InsufficientBalance, ERC20InvalidReceiver,
    ERC20InvalidSender, ERC20InvalidSpender, TokenError,
};
use crate::events::{Approval, Transfer};
use crate::host::Host;
use crate::storage::LedgerStorage;
use alloy_primitives::{Address, U256};

pub trait Erc20: LedgerStorage {
    /// Moves `value` tokens from `from` to `to`.
    ///
    /// Every check runs before the first write, so a failed call leaves storage untouched.
    ///
    /// Emits a {Transfer} event.
    fn _transfer<H: Host>(
        &mut self,
        host: &mut H,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), TokenError> {
        if from.is_zero() {
            return Err(TokenError::ERC20InvalidSender(ERC20InvalidSender {
                sender: Address::ZERO,
            }));
        }
        if to.is_zero() {
            return Err(TokenError::ERC20InvalidReceiver(ERC20InvalidReceiver {
                receiver: Address::ZERO,
            }));
        }
        let from_balance = self.get_balance(from);
        if from_balance < value {
            return Err(TokenError::ERC20InsufficientBalance(ERC20InsufficientBalance {
                sender: from,
                balance: from_balance,
                needed: value,
            }));
        }
        self.set_balance(from, from_balance - value);
        // re-read so that `from == to` nets out to zero
        let to_balance = self.get_balance(to);
        self.set_balance(to, to_balance + value);
        host.emit(Transfer { from, to, value }.into());
        Ok(())
    }

    /// Mints `value` tokens to `to`, increasing the total supply.
    ///
    /// Emits a {Transfer} event.
    fn _mint<H: Host>(&mut self, host: &mut H, to: Address, value: U256) -> Result<(), TokenError> {
        if to.is_zero() {
            return Err(TokenError::ERC20InvalidReceiver(ERC20InvalidReceiver {
                receiver: Address::ZERO,
            }));
        }
        let balance = self.get_balance(to);
        self.set_balance(to, balance + value);
        let supply = self.get_total_supply();
        self.set_total_supply(supply + value);
        host.emit(
            Transfer {
                from: Address::ZERO,
                to,
                value,
            }
            .into(),
        );
        Ok(())
    }

    /// Burns `value` tokens from `from`, reducing the total supply.
    ///
    /// Emits a {Transfer} event.
    fn _burn<H: Host>(
        &mut self,
        host: &mut H,
        from: Address,
        value: U256,
    ) -> Result<(), TokenError> {
        if from.is_zero() {
            return Err(TokenError::ERC20InvalidSender(ERC20InvalidSender {
                sender: Address::ZERO,
            }));
        }
        let balance = self.get_balance(from);
        if balance < value {
            return Err(TokenError::ERC20InsufficientBalance(ERC20InsufficientBalance {
                sender: from,
                balance,
                needed: value,
            }));
        }
        self.set_balance(from, balance - value);
        let supply = self.get_total_supply();
        self.set_total_supply(supply - value);
        host.emit(
            Transfer {
                from,
                to: Address::ZERO,
                value,
            }
            .into(),
        );
        Ok(())
    }

    /// Returns what is left of `owner`'s allowance to `spender` once `value` is spent.
    /// Does not write; callers store the result after their own checks pass.
    fn _remaining_allowance(
        &self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<U256, TokenError> {
        let allowance = self.get_allowance(owner, spender);
        if allowance < value {
            return Err(TokenError::ERC20InsufficientAllowance(ERC20InsufficientAllowance {
                spender,
                allowance,
                needed: value,
            }));
        }
        Ok(allowance - value)
    }

    /// Returns the amount of tokens in existence.
    fn total_supply(&self) -> U256 {
        self.get_total_supply()
    }

    /// Returns the amount of tokens owned by `account`.
    fn balance_of(&self, account: Address) -> U256 {
        self.get_balance(account)
    }

    /// Returns the amount of tokens that `spender` can spend on behalf of `owner`.
    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.get_allowance(owner, spender)
    }

    /// Transfer `value` tokens from the caller to `to`.
    ///
    /// Requirements:
    /// - `to` cannot be the zero address.
    /// - the caller must have a balance of at least `value`.
    ///
    /// Emits a {Transfer} event.
    fn transfer<H: Host>(
        &mut self,
        host: &mut H,
        to: Address,
        value: U256,
    ) -> Result<bool, TokenError> {
        let from = host.sender();
        self._transfer(host, from, to, value)?;
        Ok(true)
    }

    /// Sets `value` as the allowance of `spender` over the caller's tokens.
    /// Overwrites any previous allowance.
    ///
    /// Emits an {Approval} event.
    fn approve<H: Host>(
        &mut self,
        host: &mut H,
        spender: Address,
        value: U256,
    ) -> Result<bool, TokenError> {
        if spender.is_zero() {
            return Err(TokenError::ERC20InvalidSpender(ERC20InvalidSpender {
                spender: Address::ZERO,
            }));
        }
        let owner = host.sender();
        self.set_allowance(owner, spender, value);
        host.emit(
            Approval {
                owner,
                spender,
                value,
            }
            .into(),
        );
        Ok(true)
    }

    /// Transfers `value` tokens from `from` to `to`, spending the caller's allowance.
    ///
    /// Requirements:
    /// - the caller must have at least `value` of allowance over `from`'s tokens.
    /// - `to` cannot be the zero address.
    /// - `from` must have a balance of at least `value`.
    ///
    /// Emits a {Transfer} event.
    fn transfer_from<H: Host>(
        &mut self,
        host: &mut H,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, TokenError> {
        let spender = host.sender();
        let remaining = self._remaining_allowance(from, spender, value)?;
        self._transfer(host, from, to, value)?;
        // reduce allowance last, once the move has gone through
        self.set_allowance(from, spender, remaining);
        Ok(true)
    }

    /// Destroys `value` tokens from the caller.
    ///
    /// Emits a {Transfer} event to the zero address.
    fn burn<H: Host>(&mut self, host: &mut H, value: U256) -> Result<(), TokenError> {
        let from = host.sender();
        self._burn(host, from, value)
    }

    /// Destroys `value` tokens from `account`, spending the caller's allowance.
    ///
    /// Emits a {Transfer} event to the zero address.
    fn burn_from<H: Host>(
        &mut self,
        host: &mut H,
        account: Address,
        value: U256,
    ) -> Result<(), TokenError> {
        let spender = host.sender();
        let remaining = self._remaining_allowance(account, spender, value)?;
        self._burn(host, account, value)?;
        self.set_allowance(account, spender, remaining);
        Ok(())
    }
}

impl<S: LedgerStorage + ?Sized> Erc20 for S {}
