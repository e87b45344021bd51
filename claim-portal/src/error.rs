// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    primitives::{Address, TxHash, U256},
    sol_types::SolInterface,
};

use crate::api::IClaimToken::IClaimTokenErrors;

pub type Result<T, E = PortalError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("pending transaction error: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("{0}")]
    ContractDecode(#[from] ContractDecodeError),
    /// The ledger refused the operation. Never worth retrying as is.
    #[error("{0}")]
    Rejected(#[from] RejectReason),

    #[error("no wallet connected")]
    NotConnected,
    #[error("no claim is pending")]
    NothingPending,
    #[error("transaction {0} was not confirmed")]
    Unconfirmed(TxHash),
}

impl From<Result<IClaimTokenErrors, ContractDecodeError>> for PortalError {
    fn from(err: Result<IClaimTokenErrors, ContractDecodeError>) -> Self {
        match err {
            Ok(err) => Self::Rejected(err.into()),
            Err(err) => err.into(),
        }
    }
}

/// Why the ledger rejected a claim or mint.
///
/// The messages are the ones shown to the wallet holder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("Address has already claimed tokens")]
    AlreadyClaimed { account: Address },
    #[error("Would exceed maximum total supply")]
    SupplyExhausted { requested: U256, remaining: U256 },
    #[error("Caller is not the owner")]
    Unauthorized { account: Address },
    #[error("Invalid owner address {owner}")]
    InvalidOwner { owner: Address },
    #[error("Invalid receiver address {receiver}")]
    InvalidReceiver { receiver: Address },
    #[error("Transaction reverted")]
    Reverted,
}

impl From<IClaimTokenErrors> for RejectReason {
    fn from(err: IClaimTokenErrors) -> Self {
        match err {
            IClaimTokenErrors::AlreadyClaimed(e) => Self::AlreadyClaimed { account: e.account },
            IClaimTokenErrors::SupplyExhausted(e) => Self::SupplyExhausted {
                requested: e.requested,
                remaining: e.remaining,
            },
            IClaimTokenErrors::OwnableUnauthorizedAccount(e) => {
                Self::Unauthorized { account: e.account }
            }
            IClaimTokenErrors::OwnableInvalidOwner(e) => Self::InvalidOwner { owner: e.owner },
            IClaimTokenErrors::InvalidReceiver(e) => Self::InvalidReceiver {
                receiver: e.receiver,
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContractDecodeError {
    #[error("failed to send tx: {0:?}")]
    FailedToSendTx(alloy::contract::Error),
    #[error("no error payload found in response: {0:?}")]
    NoErrorPayload(alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("failed to decode error: {0:?}")]
    FailedToDecode(alloy::rpc::json_rpc::ErrorPayload),
}

/// Extracts the contract's custom error from a failed call or gas estimate.
pub fn decode_contract_error<E: SolInterface>(
    e: alloy::contract::Error,
) -> Result<E, ContractDecodeError> {
    let alloy::contract::Error::TransportError(tperr) = e else {
        return Err(ContractDecodeError::FailedToSendTx(e));
    };
    let Some(err_resp) = tperr.as_error_resp() else {
        return Err(ContractDecodeError::NoErrorPayload(tperr));
    };
    let Some(errs) = err_resp.as_decoded_interface_error::<E>() else {
        return Err(ContractDecodeError::FailedToDecode(err_resp.clone()));
    };
    Ok(errs)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::api::IClaimToken;

    #[test]
    fn reject_reasons_map_to_user_messages() {
        let account = address!("0x2000000000000000000000000000000000000002");

        let reason: RejectReason =
            IClaimTokenErrors::AlreadyClaimed(IClaimToken::AlreadyClaimed { account }).into();
        assert_eq!(reason, RejectReason::AlreadyClaimed { account });
        assert_eq!(reason.to_string(), "Address has already claimed tokens");

        let reason: RejectReason = IClaimTokenErrors::SupplyExhausted(IClaimToken::SupplyExhausted {
            requested: U256::from(10),
            remaining: U256::from(5),
        })
        .into();
        assert_eq!(reason.to_string(), "Would exceed maximum total supply");

        let reason: RejectReason = IClaimTokenErrors::OwnableUnauthorizedAccount(
            IClaimToken::OwnableUnauthorizedAccount { account },
        )
        .into();
        assert_eq!(reason, RejectReason::Unauthorized { account });
        assert_eq!(reason.to_string(), "Caller is not the owner");
    }

    #[test]
    fn decoded_revert_becomes_rejection() {
        let account = address!("0x2000000000000000000000000000000000000002");
        let decoded = Ok(IClaimTokenErrors::AlreadyClaimed(
            IClaimToken::AlreadyClaimed { account },
        ));
        let err = PortalError::from(decoded);
        assert!(matches!(
            err,
            PortalError::Rejected(RejectReason::AlreadyClaimed { .. })
        ));
    }
}
