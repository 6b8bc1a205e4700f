//! Events logged by the ledger.

use alloy_sol_types::sol;

sol! {
    /// Emitted when `value` tokens move from `from` to `to`.
    /// Mints come from and burns go to the zero address.
    event Transfer(address indexed from, address indexed to, uint256 value);
    /// Emitted when `owner` sets the allowance of `spender` to `value`.
    event Approval(address indexed owner, address indexed spender, uint256 value);
    /// Emitted when the owner sweeps tokens held by the contract to `to`.
    event TokensWithdrawn(address indexed to, uint256 amount);
    /// Emitted on every incoming ETH payment.
    event ETHReceived(address indexed sender, uint256 amount);
    /// Emitted when the owner sends ETH held by the contract to `to`.
    event ETHWithdrawn(address indexed to, uint256 amount);
    event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);
}

/// An event handed to [`crate::host::Host::emit`].
pub enum LedgerEvent {
    Transfer(Transfer),
    Approval(Approval),
    TokensWithdrawn(TokensWithdrawn),
    ETHReceived(ETHReceived),
    ETHWithdrawn(ETHWithdrawn),
    OwnershipTransferred(OwnershipTransferred),
}

impl From<Transfer> for LedgerEvent {
    fn from(event: Transfer) -> Self {
        Self::Transfer(event)
    }
}

impl From<Approval> for LedgerEvent {
    fn from(event: Approval) -> Self {
        Self::Approval(event)
    }
}

impl From<TokensWithdrawn> for LedgerEvent {
    fn from(event: TokensWithdrawn) -> Self {
        Self::TokensWithdrawn(event)
    }
}

impl From<ETHReceived> for LedgerEvent {
    fn from(event: ETHReceived) -> Self {
        Self::ETHReceived(event)
    }
}

impl From<ETHWithdrawn> for LedgerEvent {
    fn from(event: ETHWithdrawn) -> Self {
        Self::ETHWithdrawn(event)
    }
}

impl From<OwnershipTransferred> for LedgerEvent {
    fn from(event: OwnershipTransferred) -> Self {
        Self::OwnershipTransferred(event)
    }
}
