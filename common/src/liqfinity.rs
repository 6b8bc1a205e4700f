//! The Liqfinity AI token: its parameters and one-shot initialization.

use crate::access::ownable::Ownable;
use crate::errors::{AlreadyInitialized, OwnableInvalidOwner, TokenError};
use crate::host::Host;
use crate::token::erc20::Erc20;
use crate::token::params::TokenParams;
use alloy_primitives::Address;

pub struct LiqfinityParams;

/// Immutable definitions
impl TokenParams for LiqfinityParams {
    const NAME: &'static str = "Liqfinity AI";
    const SYMBOL: &'static str = "LFAI";
    const DECIMALS: u8 = 18;
    const INITIAL_SUPPLY: u64 = 1_000_000_000;
}

pub trait Initializable: Erc20 + Ownable {
    /// Stands in for a constructor: mints the whole supply of `P` to `initial_holder` and
    /// makes it the owner. Can only succeed once.
    ///
    /// Emits an {OwnershipTransferred} and a {Transfer} event.
    fn initialize<P: TokenParams, H: Host>(
        &mut self,
        host: &mut H,
        initial_holder: Address,
    ) -> Result<(), TokenError> {
        if self.is_initialized() {
            return Err(TokenError::AlreadyInitialized(AlreadyInitialized {}));
        }
        if initial_holder.is_zero() {
            return Err(TokenError::OwnableInvalidOwner(OwnableInvalidOwner {
                owner: Address::ZERO,
            }));
        }
        self.set_initialized();
        self._transfer_ownership(host, initial_holder);
        self._mint(host, initial_holder, P::initial_supply())
    }
}

impl<S: Erc20 + Ownable + ?Sized> Initializable for S {}
