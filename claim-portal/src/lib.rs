// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Off-chain access to a deployed claim token.
//!
//! [`ClaimPortal`] tracks one connected account: it polls the ledger into a
//! [`Snapshot`], submits claims, and reduces both into a [`ClaimStatus`] that
//! can be shown to the wallet holder. The ledger is reached through
//! [`ClaimTokenApi`], implemented over JSON-RPC by [`RpcClaimToken`].

pub use api::{ClaimTokenApi, IClaimToken, RpcClaimToken, DEFAULT_CONFIRMATION_TIMEOUT};
pub use error::{decode_contract_error, ContractDecodeError, PortalError, RejectReason, Result};
pub use portal::ClaimPortal;
pub use status::{format_tokens, ClaimStatus, Snapshot, Submission};

pub mod api;
pub mod error;
pub mod portal;
pub mod status;
