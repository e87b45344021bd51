// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Storage and bookkeeping for the ERC-20 side of the claim token.
//!
//! [`Erc20`] owns balances, allowances and the running total supply. It does
//! not know about the supply cap: every mint must be admitted by the caller
//! first (see [`crate::ClaimToken`]), which keeps the cap check in one place.

use alloc::string::String;
use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use stylus_sdk::prelude::*;

/// Fixed token precision.
pub const DECIMALS: u8 = 18;

sol_storage! {
    /// Erc20 implements the ERC-20 ledger.
    pub struct Erc20 {
        /// Maps users to balances
        mapping(address => uint256) balances;
        /// Maps users to a mapping of each spender's allowance
        mapping(address => mapping(address => uint256)) allowances;
        /// The total supply of the token
        uint256 total_supply;
        /// Token name, set once by the constructor
        string name;
        /// Token symbol, set once by the constructor
        string symbol;
    }
}

sol! {
    event Transfer(address indexed from, address indexed to, uint256 value);
    event Approval(address indexed owner, address indexed spender, uint256 value);

    error InsufficientBalance(address from, uint256 have, uint256 want);
    error InsufficientAllowance(address owner, address spender, uint256 have, uint256 want);
    error InvalidSender(address sender);
    error InvalidReceiver(address receiver);
}

/// Represents the ways token transfers may fail.
#[derive(SolidityError)]
pub enum Erc20Error {
    InsufficientBalance(InsufficientBalance),
    InsufficientAllowance(InsufficientAllowance),
    InvalidSender(InvalidSender),
    InvalidReceiver(InvalidReceiver),
}

impl Erc20 {
    /// Stores the immutable token metadata.
    pub fn init_metadata(&mut self, name: &str, symbol: &str) {
        self.name.set_str(name);
        self.symbol.set_str(symbol);
    }

    pub fn name(&self) -> String {
        self.name.get_string()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_string()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(owner)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.getter(owner).get(spender)
    }

    /// Movement of funds between 2 accounts.
    pub fn transfer(&mut self, from: Address, to: Address, value: U256) -> Result<(), Erc20Error> {
        if from.is_zero() {
            return Err(InvalidSender { sender: from }.into());
        }
        if to.is_zero() {
            return Err(InvalidReceiver { receiver: to }.into());
        }

        {
            let mut sender_balance = self.balances.setter(from);
            let old_sender_balance = sender_balance.get();
            if old_sender_balance < value {
                return Err(InsufficientBalance {
                    from,
                    have: old_sender_balance,
                    want: value,
                }
                .into());
            }
            sender_balance.set(old_sender_balance - value);
        }

        // Cannot overflow: the receiver's balance is bounded by the total supply.
        {
            let mut to_balance = self.balances.setter(to);
            let new_to_balance = to_balance.get() + value;
            to_balance.set(new_to_balance);
        }

        self.vm().log(Transfer { from, to, value });
        Ok(())
    }

    /// Spends `value` of the allowance `owner` granted to `spender`.
    pub fn spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Erc20Error> {
        let mut owner_allowances = self.allowances.setter(owner);
        let mut allowance = owner_allowances.setter(spender);
        let old_allowance = allowance.get();
        if old_allowance < value {
            return Err(InsufficientAllowance {
                owner,
                spender,
                have: old_allowance,
                want: value,
            }
            .into());
        }
        // An unlimited approval is never consumed.
        if old_allowance != U256::MAX {
            allowance.set(old_allowance - value);
        }
        Ok(())
    }

    pub fn approve(&mut self, owner: Address, spender: Address, value: U256) {
        self.allowances.setter(owner).insert(spender, value);
        self.vm().log(Approval {
            owner,
            spender,
            value,
        });
    }

    /// Mints `value` tokens to `address`.
    ///
    /// The caller is responsible for admitting `value` under the supply cap
    /// beforehand, which also rules out overflow of the running total.
    pub fn mint(&mut self, address: Address, value: U256) {
        {
            let mut balance = self.balances.setter(address);
            let new_balance = balance.get() + value;
            balance.set(new_balance);
        }

        self.total_supply.set(self.total_supply.get() + value);

        self.vm().log(Transfer {
            from: Address::ZERO,
            to: address,
            value,
        });
    }
}

/// Trait that contains the Erc20 token methods.
#[public]
pub trait IErc20 {
    /// Immutable token name
    fn name(&self) -> String;

    /// Immutable token symbol
    fn symbol(&self) -> String;

    /// Immutable token decimals
    fn decimals(&self) -> u8;

    /// Total supply of tokens
    fn total_supply(&self) -> U256;

    /// Balance of `owner`
    fn balance_of(&self, owner: Address) -> U256;

    /// Transfers `value` tokens from msg_sender to `to`
    fn transfer(&mut self, to: Address, value: U256) -> Result<bool, Erc20Error>;

    /// Transfers `value` tokens from `from` to `to`
    /// (msg_sender must be able to spend at least `value` tokens from `from`)
    fn transfer_from(&mut self, from: Address, to: Address, value: U256)
        -> Result<bool, Erc20Error>;

    /// Approves the spenditure of `value` tokens of msg_sender to `spender`
    fn approve(&mut self, spender: Address, value: U256) -> bool;

    /// Returns the allowance of `spender` on `owner`'s tokens
    fn allowance(&self, owner: Address, spender: Address) -> U256;
}
