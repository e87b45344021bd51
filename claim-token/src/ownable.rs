// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Single-owner access control.

use alloy_primitives::Address;
use alloy_sol_types::sol;
use stylus_sdk::{prelude::*, storage::StorageAddress};

sol! {
    event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);

    error OwnableUnauthorizedAccount(address account);
    error OwnableInvalidOwner(address owner);
}

#[derive(SolidityError)]
pub enum OwnableError {
    UnauthorizedAccount(OwnableUnauthorizedAccount),
    InvalidOwner(OwnableInvalidOwner),
}

#[storage]
pub struct Ownable {
    owner: StorageAddress,
}

impl Ownable {
    /// Sets the first owner. Only meaningful from a constructor.
    pub fn initialize(&mut self, initial_owner: Address) -> Result<(), OwnableError> {
        if initial_owner.is_zero() {
            return Err(OwnableInvalidOwner {
                owner: initial_owner,
            }
            .into());
        }
        self.transfer_ownership_impl(initial_owner);
        Ok(())
    }

    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    /// Fails unless msg_sender is the current owner.
    pub fn only_owner(&self) -> Result<(), OwnableError> {
        let sender = self.vm().msg_sender();
        if sender != self.owner.get() {
            return Err(OwnableUnauthorizedAccount { account: sender }.into());
        }
        Ok(())
    }

    pub fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), OwnableError> {
        self.only_owner()?;
        if new_owner.is_zero() {
            return Err(OwnableInvalidOwner { owner: new_owner }.into());
        }
        self.transfer_ownership_impl(new_owner);
        Ok(())
    }

    pub fn renounce_ownership(&mut self) -> Result<(), OwnableError> {
        self.only_owner()?;
        self.transfer_ownership_impl(Address::ZERO);
        Ok(())
    }

    fn transfer_ownership_impl(&mut self, new_owner: Address) {
        let previous_owner = self.owner.get();
        self.owner.set(new_owner);
        self.vm().log(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }
}

#[public]
pub trait IOwnable {
    /// Current owner, or the zero address once renounced
    fn owner(&self) -> Address;

    /// Hands ownership to `new_owner` (owner only)
    fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), OwnableError>;

    /// Leaves the contract without an owner (owner only)
    fn renounce_ownership(&mut self) -> Result<(), OwnableError>;
}
