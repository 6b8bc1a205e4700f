use alloy_primitives::U256;

/// Immutable token definitions, fixed at compile time.
pub trait TokenParams {
    const NAME: &'static str;
    const SYMBOL: &'static str;
    const DECIMALS: u8;
    /// Supply minted at initialization, in whole tokens.
    const INITIAL_SUPPLY: u64;

    /// `INITIAL_SUPPLY` scaled by `10^DECIMALS`.
    fn initial_supply() -> U256 {
        U256::from(Self::INITIAL_SUPPLY) * U256::from(10).pow(U256::from(Self::DECIMALS))
    }
}
