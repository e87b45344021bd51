// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Drives the claim flow for one connected account.

use alloy::primitives::{Address, TxHash, U256};
use log::{debug, info, warn};

use crate::{
    api::ClaimTokenApi,
    error::{PortalError, Result},
    status::{ClaimStatus, Snapshot, Submission},
};

pub struct ClaimPortal<A> {
    api: A,
    snapshot: Option<Snapshot>,
    submission: Submission,
}

impl<A: ClaimTokenApi> ClaimPortal<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            snapshot: None,
            submission: Submission::Idle,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn account(&self) -> Option<Address> {
        self.api.account()
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn status(&self) -> ClaimStatus {
        ClaimStatus::derive(self.account(), self.snapshot.as_ref(), &self.submission)
    }

    /// Reads a fresh snapshot for the connected account.
    pub async fn refresh(&mut self) -> Result<&Snapshot> {
        let account = self.account().ok_or(PortalError::NotConnected)?;
        let snapshot = self.read_snapshot(account).await?;
        debug!("snapshot for {account}: {snapshot:?}");
        Ok(self.snapshot.insert(snapshot))
    }

    /// Reads a snapshot for any account without touching portal state.
    pub async fn inspect(&self, account: Address) -> Result<Snapshot> {
        self.read_snapshot(account).await
    }

    async fn read_snapshot(&self, account: Address) -> Result<Snapshot> {
        let (balance, claim_amount, remaining_supply, can_claim, has_claimed) = tokio::try_join!(
            self.api.balance_of(account),
            self.api.claim_amount(),
            self.api.remaining_supply(),
            self.api.can_claim(account),
            self.api.has_claimed(account),
        )?;
        Ok(Snapshot {
            account,
            balance,
            claim_amount,
            remaining_supply,
            can_claim,
            has_claimed,
        })
    }

    /// Broadcasts a claim if the latest snapshot allows it.
    ///
    /// The snapshot only gates the attempt. A rejection from the ledger is
    /// recorded as a failed submission and never retried.
    pub async fn submit_claim(&mut self) -> Result<TxHash> {
        let snapshot = match &self.snapshot {
            Some(snapshot) => snapshot.clone(),
            None => self.refresh().await?.clone(),
        };
        if let Some(reason) = snapshot.blocker() {
            info!("not submitting claim: {reason}");
            self.submission = Submission::Failed(reason.clone());
            return Err(reason.into());
        }

        match self.api.submit_claim().await {
            Ok(tx) => {
                self.submission = Submission::Pending(tx);
                Ok(tx)
            }
            Err(err) => Err(self.record_failure(err)),
        }
    }

    /// Waits for the pending claim and re-reads the ledger.
    pub async fn await_confirmation(&mut self) -> Result<TxHash> {
        let Submission::Pending(tx) = self.submission else {
            return Err(PortalError::NothingPending);
        };
        if let Err(err) = self.api.confirm(tx).await {
            return Err(self.record_failure(err));
        }
        info!("claim {tx} confirmed");
        self.submission = Submission::Confirmed(tx);
        self.refresh().await?;
        Ok(tx)
    }

    /// Submits a claim and waits for it to land.
    pub async fn claim(&mut self) -> Result<TxHash> {
        self.submit_claim().await?;
        self.await_confirmation().await
    }

    /// Mints `amount` to `recipient` as the token owner.
    pub async fn owner_mint(&mut self, recipient: Address, amount: U256) -> Result<TxHash> {
        let tx = self.api.submit_owner_mint(recipient, amount).await?;
        self.api.confirm(tx).await?;
        info!("minted {amount} to {recipient} in {tx}");
        if self.account().is_some() {
            self.refresh().await?;
        }
        Ok(tx)
    }

    fn record_failure(&mut self, err: PortalError) -> PortalError {
        if let PortalError::Rejected(reason) = &err {
            warn!("claim rejected: {reason}");
            self.submission = Submission::Failed(reason.clone());
        }
        err
    }
}
