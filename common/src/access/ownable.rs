//! Single-owner access control, with the OpenZeppelin 5.x error names.

use crate::errors::{OwnableInvalidOwner, OwnableUnauthorizedAccount, TokenError};
use crate::events::OwnershipTransferred;
use crate::host::Host;
use crate::storage::LedgerStorage;
use alloy_primitives::Address;

pub trait Ownable: LedgerStorage {
    /// Returns the current owner.
    fn owner(&self) -> Address {
        self.get_owner()
    }

    /// Fails unless the caller is the current owner.
    fn only_owner<H: Host>(&self, host: &H) -> Result<(), TokenError> {
        let caller = host.sender();
        if caller != self.get_owner() {
            return Err(TokenError::OwnableUnauthorizedAccount(
                OwnableUnauthorizedAccount { account: caller },
            ));
        }
        Ok(())
    }

    /// Hands the owner role to `new_owner`.
    ///
    /// Emits an {OwnershipTransferred} event.
    fn transfer_ownership<H: Host>(
        &mut self,
        host: &mut H,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        self.only_owner(host)?;
        if new_owner.is_zero() {
            return Err(TokenError::OwnableInvalidOwner(OwnableInvalidOwner {
                owner: Address::ZERO,
            }));
        }
        self._transfer_ownership(host, new_owner);
        Ok(())
    }

    /// Leaves the contract without an owner. Every owner-only call fails afterwards.
    fn renounce_ownership<H: Host>(&mut self, host: &mut H) -> Result<(), TokenError> {
        self.only_owner(host)?;
        self._transfer_ownership(host, Address::ZERO);
        Ok(())
    }

    /// Sets the owner without any check.
    fn _transfer_ownership<H: Host>(&mut self, host: &mut H, new_owner: Address) {
        let previous_owner = self.get_owner();
        self.set_owner(new_owner);
        host.emit(
            OwnershipTransferred {
                previous_owner,
                new_owner,
            }
            .into(),
        );
    }
}

impl<S: LedgerStorage + ?Sized> Ownable for S {}
