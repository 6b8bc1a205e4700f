//! Native Rust implementations of the ledger seams, used only by the unit tests.

use crate::events::LedgerEvent;
use crate::host::Host;
use crate::liqfinity::{Initializable, LiqfinityParams};
use crate::storage::LedgerStorage;
use crate::token::params::TokenParams;
use alloy_primitives::{Address, U256};
use ethers::utils::parse_ether;
use std::collections::HashMap;

pub fn owner() -> Address {
    Address::with_last_byte(0x11)
}

pub fn user1() -> Address {
    Address::with_last_byte(0x21)
}

pub fn user2() -> Address {
    Address::with_last_byte(0x22)
}

pub fn user3() -> Address {
    Address::with_last_byte(0x23)
}

/// Address the ledger itself is deployed at.
pub fn contract() -> Address {
    Address::with_last_byte(0xc0)
}

pub fn initial_supply() -> U256 {
    LiqfinityParams::initial_supply()
}

/// Parses a decimal ether amount into wei, like `ethers.parseEther`.
pub fn ether(amount: &str) -> eyre::Result<U256> {
    let wei = parse_ether(amount)?;
    Ok(U256::from_limbs(wei.0))
}

#[derive(Default)]
pub struct MemoryLedger {
    total_supply: U256,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    owner: Address,
    initialized: bool,
}

impl LedgerStorage for MemoryLedger {
    fn get_total_supply(&self) -> U256 {
        self.total_supply
    }

    fn set_total_supply(&mut self, value: U256) {
        self.total_supply = value;
    }

    fn get_balance(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    fn set_balance(&mut self, account: Address, value: U256) {
        self.balances.insert(account, value);
    }

    fn get_allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, value: U256) {
        self.allowances.insert((owner, spender), value);
    }

    fn get_owner(&self) -> Address {
        self.owner
    }

    fn set_owner(&mut self, owner: Address) {
        self.owner = owner;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn set_initialized(&mut self) {
        self.initialized = true;
    }
}

/// Records every event and ETH send instead of touching a chain.
pub struct TestHost {
    pub sender: Address,
    pub value: U256,
    pub this: Address,
    pub eth_balance: U256,
    /// Recipients refuse ETH while set.
    pub reject_eth: bool,
    pub eth_sent: Vec<(Address, U256)>,
    pub events: Vec<LedgerEvent>,
}

impl TestHost {
    pub fn new(sender: Address) -> Self {
        Self {
            sender,
            value: U256::ZERO,
            this: contract(),
            eth_balance: U256::ZERO,
            reject_eth: false,
            eth_sent: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn as_caller(&mut self, caller: Address) -> &mut Self {
        self.sender = caller;
        self.value = U256::ZERO;
        self
    }

    /// Simulates `caller` sending `value` wei along with the next call.
    pub fn paying(&mut self, caller: Address, value: U256) -> &mut Self {
        self.sender = caller;
        self.value = value;
        self.eth_balance += value;
        self
    }

    /// `(from, to, value)` of every `Transfer` event, in order.
    pub fn transfers(&self) -> Vec<(Address, Address, U256)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                LedgerEvent::Transfer(e) => Some((e.from, e.to, e.value)),
                _ => None,
            })
            .collect()
    }
}

impl Host for TestHost {
    fn sender(&self) -> Address {
        self.sender
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn this(&self) -> Address {
        self.this
    }

    fn eth_balance(&self) -> U256 {
        self.eth_balance
    }

    fn transfer_eth(&mut self, to: Address, amount: U256) -> Result<(), Vec<u8>> {
        if self.reject_eth || amount > self.eth_balance {
            return Err(Vec::new());
        }
        self.eth_balance -= amount;
        self.eth_sent.push((to, amount));
        Ok(())
    }

    fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

/// A freshly initialized ledger with the whole supply on [`owner`], and a host calling as
/// [`owner`] with no events recorded yet.
pub fn deploy() -> (MemoryLedger, TestHost) {
    let mut ledger = MemoryLedger::default();
    let mut host = TestHost::new(owner());
    ledger
        .initialize::<LiqfinityParams, _>(&mut host, owner())
        .expect("initialization succeeds on an empty ledger");
    host.events.clear();
    (ledger, host)
}
