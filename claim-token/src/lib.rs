// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! A capped ERC-20 token where every address may claim a fixed amount once.
//!
//! The ledger keeps three pieces of state beyond the plain token: the set of
//! addresses that have claimed, the immutable [`MAX_TOTAL_SUPPLY`] cap, and the
//! owner allowed to mint outside of the claim mechanism. Every mint, whether
//! from [`ClaimToken::claim_tokens`], [`ClaimToken::owner_mint`] or the
//! constructor, goes through the same supply guard that
//! [`ClaimToken::can_claim_tokens`] consults, so the query predicts the outcome
//! of the mutation against the same ledger state.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

extern crate alloc;

pub mod erc20;
pub mod ownable;

use alloc::string::String;
use alloy_primitives::{uint, Address, U256};
use alloy_sol_types::sol;
use stylus_sdk::{
    console,
    prelude::*,
    storage::{StorageBool, StorageMap},
};

use crate::erc20::{Erc20, Erc20Error, IErc20, InvalidReceiver, DECIMALS};
use crate::ownable::{
    IOwnable, Ownable, OwnableError, OwnableInvalidOwner, OwnableUnauthorizedAccount,
};

/// Tokens granted by a single claim: 10 whole tokens.
pub const CLAIM_AMOUNT: U256 = uint!(10_000000000000000000_U256);

/// Tokens minted to the owner at construction: 10,000 whole tokens.
pub const INITIAL_SUPPLY: U256 = uint!(10_000_000000000000000000_U256);

/// Hard cap on the total supply: 1,000,000 whole tokens.
pub const MAX_TOTAL_SUPPLY: U256 = uint!(1_000_000_000000000000000000_U256);

sol! {
    event TokensClaimed(address indexed claimer, uint256 amount);

    error AlreadyClaimed(address account);
    error SupplyExhausted(uint256 requested, uint256 remaining);
}

/// Represents the ways claim and mint operations may fail.
#[derive(SolidityError)]
pub enum ClaimTokenError {
    AlreadyClaimed(AlreadyClaimed),
    SupplyExhausted(SupplyExhausted),
    Unauthorized(OwnableUnauthorizedAccount),
    InvalidOwner(OwnableInvalidOwner),
    InvalidReceiver(InvalidReceiver),
}

impl From<OwnableError> for ClaimTokenError {
    fn from(err: OwnableError) -> Self {
        match err {
            OwnableError::UnauthorizedAccount(e) => Self::Unauthorized(e),
            OwnableError::InvalidOwner(e) => Self::InvalidOwner(e),
        }
    }
}

#[storage]
#[entrypoint]
pub struct ClaimToken {
    erc20: Erc20,
    ownable: Ownable,
    /// Addresses that have claimed. Never reset.
    claimed: StorageMap<Address, StorageBool>,
}

#[public]
#[implements(IErc20, IOwnable)]
impl ClaimToken {
    /// Fixes name, symbol and owner, then mints the initial supply to the owner.
    #[constructor]
    pub fn constructor(
        &mut self,
        name: String,
        symbol: String,
        initial_owner: Address,
    ) -> Result<(), ClaimTokenError> {
        self.ownable.initialize(initial_owner)?;
        self.erc20.init_metadata(&name, &symbol);
        self.mint_capped(initial_owner, INITIAL_SUPPLY)
    }

    /// Mints [`CLAIM_AMOUNT`] to msg_sender, once per address.
    pub fn claim_tokens(&mut self) -> Result<(), ClaimTokenError> {
        let claimer = self.vm().msg_sender();
        if self.claimed.get(claimer) {
            return Err(AlreadyClaimed { account: claimer }.into());
        }
        self.mint_capped(claimer, CLAIM_AMOUNT)?;
        self.claimed.insert(claimer, true);
        console!("{claimer} claimed {CLAIM_AMOUNT}");

        self.vm().log(TokensClaimed {
            claimer,
            amount: CLAIM_AMOUNT,
        });
        Ok(())
    }

    /// Whether `account` would succeed in claiming against the current state.
    pub fn can_claim_tokens(&self, account: Address) -> bool {
        !self.claimed.get(account) && self.admit(CLAIM_AMOUNT).is_ok()
    }

    pub fn has_claimed(&self, account: Address) -> bool {
        self.claimed.get(account)
    }

    pub fn get_remaining_supply(&self) -> U256 {
        // The cap invariant keeps this from underflowing.
        MAX_TOTAL_SUPPLY - self.erc20.total_supply()
    }

    pub fn get_claim_amount(&self) -> U256 {
        CLAIM_AMOUNT
    }

    #[selector(name = "MAX_TOTAL_SUPPLY")]
    pub fn max_total_supply(&self) -> U256 {
        MAX_TOTAL_SUPPLY
    }

    /// Mints `amount` to `recipient` outside of the claim mechanism (owner only).
    pub fn owner_mint(&mut self, recipient: Address, amount: U256) -> Result<(), ClaimTokenError> {
        self.ownable.only_owner()?;
        self.mint_capped(recipient, amount)
    }
}

impl ClaimToken {
    /// Supply guard: checks that `amount` more tokens fit under the cap.
    ///
    /// Returns the total supply after such a mint.
    fn admit(&self, amount: U256) -> Result<U256, ClaimTokenError> {
        let supply = self.erc20.total_supply();
        supply
            .checked_add(amount)
            .filter(|next| *next <= MAX_TOTAL_SUPPLY)
            .ok_or_else(|| {
                SupplyExhausted {
                    requested: amount,
                    remaining: MAX_TOTAL_SUPPLY.saturating_sub(supply),
                }
                .into()
            })
    }

    fn mint_capped(&mut self, recipient: Address, amount: U256) -> Result<(), ClaimTokenError> {
        if recipient.is_zero() {
            return Err(InvalidReceiver {
                receiver: recipient,
            }
            .into());
        }
        self.admit(amount)?;
        self.erc20.mint(recipient, amount);
        Ok(())
    }
}

#[public]
impl IErc20 for ClaimToken {
    fn name(&self) -> String {
        self.erc20.name()
    }

    fn symbol(&self) -> String {
        self.erc20.symbol()
    }

    fn decimals(&self) -> u8 {
        DECIMALS
    }

    fn total_supply(&self) -> U256 {
        self.erc20.total_supply()
    }

    fn balance_of(&self, owner: Address) -> U256 {
        self.erc20.balance_of(owner)
    }

    fn transfer(&mut self, to: Address, value: U256) -> Result<bool, Erc20Error> {
        let from = self.vm().msg_sender();
        self.erc20.transfer(from, to, value)?;
        Ok(true)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Erc20Error> {
        let spender = self.vm().msg_sender();
        self.erc20.spend_allowance(from, spender, value)?;
        self.erc20.transfer(from, to, value)?;
        Ok(true)
    }

    fn approve(&mut self, spender: Address, value: U256) -> bool {
        let owner = self.vm().msg_sender();
        self.erc20.approve(owner, spender, value);
        true
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.erc20.allowance(owner, spender)
    }
}

#[public]
impl IOwnable for ClaimToken {
    fn owner(&self) -> Address {
        self.ownable.owner()
    }

    fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), OwnableError> {
        self.ownable.transfer_ownership(new_owner)
    }

    fn renounce_ownership(&mut self) -> Result<(), OwnableError> {
        self.ownable.renounce_ownership()
    }
}
