//! Solidity custom errors returned by the ledger, and their ABI encoding.

use alloc::vec::Vec;
use alloy_sol_types::{sol, SolError};
use core::fmt;

sol! {
    /// A zero address was given where a recipient is required.
    error ZeroAddress();
    /// A withdrawal of zero tokens was requested.
    error ZeroAmount();
    /// The contract holds fewer tokens than the withdrawal asks for.
    error InsufficientTokenBalance(uint256 balance, uint256 needed);
    /// The contract holds less ETH than the withdrawal asks for.
    error InsufficientETHBalance(uint256 balance, uint256 needed);
    /// The recipient refused the ETH transfer.
    error ETHTransferFailed(address to, uint256 amount);
    /// `init` was already called.
    error AlreadyInitialized();

    /// The caller is not the owner.
    error OwnableUnauthorizedAccount(address account);
    /// The proposed owner is not a valid owner (the zero address).
    error OwnableInvalidOwner(address owner);

    error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
    error ERC20InvalidSender(address sender);
    error ERC20InvalidReceiver(address receiver);
    error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);
    error ERC20InvalidSpender(address spender);
}

/// Every way a ledger operation can fail.
///
/// Converts into the ABI-encoded revert payload through `From<TokenError> for Vec<u8>`,
/// which is what the Stylus router expects from a fallible external method.
pub enum TokenError {
    ZeroAddress(ZeroAddress),
    ZeroAmount(ZeroAmount),
    InsufficientTokenBalance(InsufficientTokenBalance),
    InsufficientETHBalance(InsufficientETHBalance),
    ETHTransferFailed(ETHTransferFailed),
    AlreadyInitialized(AlreadyInitialized),
    OwnableUnauthorizedAccount(OwnableUnauthorizedAccount),
    OwnableInvalidOwner(OwnableInvalidOwner),
    ERC20InsufficientBalance(ERC20InsufficientBalance),
    ERC20InvalidSender(ERC20InvalidSender),
    ERC20InvalidReceiver(ERC20InvalidReceiver),
    ERC20InsufficientAllowance(ERC20InsufficientAllowance),
    ERC20InvalidSpender(ERC20InvalidSpender),
}

impl From<TokenError> for Vec<u8> {
    fn from(err: TokenError) -> Vec<u8> {
        match err {
            TokenError::ZeroAddress(e) => e.encode(),
            TokenError::ZeroAmount(e) => e.encode(),
            TokenError::InsufficientTokenBalance(e) => e.encode(),
            TokenError::InsufficientETHBalance(e) => e.encode(),
            TokenError::ETHTransferFailed(e) => e.encode(),
            TokenError::AlreadyInitialized(e) => e.encode(),
            TokenError::OwnableUnauthorizedAccount(e) => e.encode(),
            TokenError::OwnableInvalidOwner(e) => e.encode(),
            TokenError::ERC20InsufficientBalance(e) => e.encode(),
            TokenError::ERC20InvalidSender(e) => e.encode(),
            TokenError::ERC20InvalidReceiver(e) => e.encode(),
            TokenError::ERC20InsufficientAllowance(e) => e.encode(),
            TokenError::ERC20InvalidSpender(e) => e.encode(),
        }
    }
}

impl TokenError {
    /// Name of the Solidity error this variant encodes to.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ZeroAddress(_) => "ZeroAddress",
            Self::ZeroAmount(_) => "ZeroAmount",
            Self::InsufficientTokenBalance(_) => "InsufficientTokenBalance",
            Self::InsufficientETHBalance(_) => "InsufficientETHBalance",
            Self::ETHTransferFailed(_) => "ETHTransferFailed",
            Self::AlreadyInitialized(_) => "AlreadyInitialized",
            Self::OwnableUnauthorizedAccount(_) => "OwnableUnauthorizedAccount",
            Self::OwnableInvalidOwner(_) => "OwnableInvalidOwner",
            Self::ERC20InsufficientBalance(_) => "ERC20InsufficientBalance",
            Self::ERC20InvalidSender(_) => "ERC20InvalidSender",
            Self::ERC20InvalidReceiver(_) => "ERC20InvalidReceiver",
            Self::ERC20InsufficientAllowance(_) => "ERC20InsufficientAllowance",
            Self::ERC20InvalidSpender(_) => "ERC20InvalidSpender",
        }
    }
}

impl fmt::Debug for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
impl std::error::Error for TokenError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ether, user1};
    use alloy_primitives::Address;

    #[test]
    fn test_revert_payloads_carry_standard_selectors() {
        let data: Vec<u8> = TokenError::ZeroAddress(ZeroAddress {}).into();
        assert_eq!(hex::encode(&data), "d92e233d");

        let data: Vec<u8> =
            TokenError::OwnableUnauthorizedAccount(OwnableUnauthorizedAccount { account: user1() })
                .into();
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(hex::encode(&data[..4]), "118cdaa7");
        // address is left-padded into the single argument word
        assert_eq!(&data[4..16], &[0u8; 12]);
        assert_eq!(Address::from_slice(&data[16..]), user1());
    }

    #[test]
    fn test_revert_payload_encodes_arguments() -> eyre::Result<()> {
        let needed = ether("2")?;
        let data: Vec<u8> = TokenError::InsufficientETHBalance(InsufficientETHBalance {
            balance: ether("1")?,
            needed,
        })
        .into();
        assert_eq!(&data[..4], InsufficientETHBalance::SELECTOR.as_slice());
        assert_eq!(data.len(), 4 + 2 * 32);
        assert_eq!(&data[36..68], needed.to_be_bytes::<32>().as_slice());
        Ok(())
    }

    #[test]
    fn test_debug_names_the_variant() {
        let err = TokenError::ZeroAmount(ZeroAmount {});
        assert_eq!(format!("{err}"), "ZeroAmount");

        let err = TokenError::ERC20InvalidReceiver(ERC20InvalidReceiver {
            receiver: Address::ZERO,
        });
        assert_eq!(format!("{err:?}"), "ERC20InvalidReceiver");
    }
}
