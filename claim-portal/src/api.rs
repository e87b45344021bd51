// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Access to a deployed claim token.
//!
//! [`ClaimTokenApi`] is the seam between the portal and the ledger. Queries
//! are cheap reads that may be stale by the time a transaction lands; the
//! submitted transaction is the only authoritative answer.

use std::{collections::HashMap, time::Duration};

use alloy::{
    network::{ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes, TxHash, U256},
    providers::{PendingTransactionBuilder, Provider},
    rpc::types::TransactionRequest,
    sol,
};
use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::error::{decode_contract_error, PortalError, RejectReason, Result};

sol! {
    #[sol(rpc)]
    interface IClaimToken {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
        function owner() external view returns (address);
        function claimTokens() external;
        function canClaimTokens(address account) external view returns (bool);
        function hasClaimed(address account) external view returns (bool);
        function getRemainingSupply() external view returns (uint256);
        function getClaimAmount() external view returns (uint256);
        function MAX_TOTAL_SUPPLY() external view returns (uint256);
        function ownerMint(address recipient, uint256 amount) external;

        event TokensClaimed(address indexed claimer, uint256 amount);

        error AlreadyClaimed(address account);
        error SupplyExhausted(uint256 requested, uint256 remaining);
        error OwnableUnauthorizedAccount(address account);
        error OwnableInvalidOwner(address owner);
        error InvalidReceiver(address receiver);
    }
}

/// Upper bound on how long to wait for a submitted transaction.
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Operations the portal needs from a claim token.
#[allow(async_fn_in_trait)]
pub trait ClaimTokenApi {
    /// The address transactions are sent from, if any.
    fn account(&self) -> Option<Address>;

    async fn claim_amount(&self) -> Result<U256>;
    async fn remaining_supply(&self) -> Result<U256>;
    async fn balance_of(&self, account: Address) -> Result<U256>;
    async fn can_claim(&self, account: Address) -> Result<bool>;
    async fn has_claimed(&self, account: Address) -> Result<bool>;

    /// Submits a claim for [`Self::account`] and returns once it is broadcast.
    async fn submit_claim(&self) -> Result<TxHash>;

    /// Submits an owner mint and returns once it is broadcast.
    async fn submit_owner_mint(&self, recipient: Address, amount: U256) -> Result<TxHash>;

    /// Waits until `tx` is included and fails if it reverted, with the
    /// ledger's reason when it can be recovered.
    async fn confirm(&self, tx: TxHash) -> Result<()>;
}

/// A [`ClaimTokenApi`] backed by a JSON-RPC provider.
pub struct RpcClaimToken<P> {
    token: IClaimToken::IClaimTokenInstance<P>,
    account: Option<Address>,
    confirmation_timeout: Duration,
    /// Calldata of broadcast transactions, kept to replay a revert.
    submitted: Mutex<HashMap<TxHash, Bytes>>,
}

impl<P: Provider> RpcClaimToken<P> {
    pub fn new(address: Address, provider: P, account: Option<Address>) -> Self {
        Self {
            token: IClaimToken::new(address, provider),
            account,
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
            submitted: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_confirmation_timeout(mut self, timeout: Duration) -> Self {
        self.confirmation_timeout = timeout;
        self
    }

    pub fn address(&self) -> Address {
        *self.token.address()
    }

    fn sender(&self) -> Result<Address> {
        self.account.ok_or(PortalError::NotConnected)
    }

    /// Re-executes a reverted transaction on the state of the block that
    /// included it and decodes the custom error it produced.
    async fn revert_reason(&self, tx: TxHash, block: Option<u64>) -> RejectReason {
        let (Some(input), Some(from)) = (self.submitted.lock().remove(&tx), self.account) else {
            return RejectReason::Reverted;
        };
        let request = TransactionRequest::default()
            .with_from(from)
            .with_to(self.address())
            .with_input(input);
        let mut call = self.token.provider().call(request);
        if let Some(block) = block {
            call = call.block(block.into());
        }
        let Err(err) = call.await else {
            warn!("tx {tx} reverted but succeeds on replay");
            return RejectReason::Reverted;
        };
        match decode_contract_error::<IClaimToken::IClaimTokenErrors>(
            alloy::contract::Error::TransportError(err),
        ) {
            Ok(err) => err.into(),
            Err(err) => {
                warn!("could not decode revert of {tx}: {err}");
                RejectReason::Reverted
            }
        }
    }
}

impl<P: Provider> ClaimTokenApi for RpcClaimToken<P> {
    fn account(&self) -> Option<Address> {
        self.account
    }

    async fn claim_amount(&self) -> Result<U256> {
        Ok(self.token.getClaimAmount().call().await?)
    }

    async fn remaining_supply(&self) -> Result<U256> {
        Ok(self.token.getRemainingSupply().call().await?)
    }

    async fn balance_of(&self, account: Address) -> Result<U256> {
        Ok(self.token.balanceOf(account).call().await?)
    }

    async fn can_claim(&self, account: Address) -> Result<bool> {
        Ok(self.token.canClaimTokens(account).call().await?)
    }

    async fn has_claimed(&self, account: Address) -> Result<bool> {
        Ok(self.token.hasClaimed(account).call().await?)
    }

    async fn submit_claim(&self) -> Result<TxHash> {
        let from = self.sender()?;
        let call = self.token.claimTokens().from(from);
        // Simulate first so a rejection surfaces as a decodable revert.
        call.call()
            .await
            .map_err(decode_contract_error::<IClaimToken::IClaimTokenErrors>)?;
        let pending = call
            .send()
            .await
            .map_err(decode_contract_error::<IClaimToken::IClaimTokenErrors>)?;
        let tx = *pending.tx_hash();
        self.submitted.lock().insert(tx, call.calldata().clone());
        info!("claim submitted by {from}: {tx}");
        Ok(tx)
    }

    async fn submit_owner_mint(&self, recipient: Address, amount: U256) -> Result<TxHash> {
        let from = self.sender()?;
        let call = self.token.ownerMint(recipient, amount).from(from);
        call.call()
            .await
            .map_err(decode_contract_error::<IClaimToken::IClaimTokenErrors>)?;
        let pending = call
            .send()
            .await
            .map_err(decode_contract_error::<IClaimToken::IClaimTokenErrors>)?;
        let tx = *pending.tx_hash();
        self.submitted.lock().insert(tx, call.calldata().clone());
        info!("mint of {amount} to {recipient} submitted: {tx}");
        Ok(tx)
    }

    async fn confirm(&self, tx: TxHash) -> Result<()> {
        let root = self.token.provider().root().clone();
        let receipt = PendingTransactionBuilder::new(root, tx)
            .with_timeout(Some(self.confirmation_timeout))
            .get_receipt()
            .await?;
        debug!(
            "tx {tx} included in block {:?}, gas used {}",
            receipt.block_number(),
            receipt.gas_used()
        );
        if !receipt.status() {
            return Err(self.revert_reason(tx, receipt.block_number()).await.into());
        }
        self.submitted.lock().remove(&tx);
        Ok(())
    }
}
