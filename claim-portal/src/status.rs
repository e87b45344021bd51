// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

use alloy::primitives::{utils::format_ether, Address, TxHash, U256};

use crate::error::RejectReason;

/// Formats a token amount in whole units without trailing zeros.
pub fn format_tokens(amount: U256) -> String {
    let formatted = format_ether(amount);
    match formatted.split_once('.') {
        Some((whole, fraction)) => match fraction.trim_end_matches('0') {
            "" => whole.to_owned(),
            fraction => format!("{whole}.{fraction}"),
        },
        None => formatted,
    }
}

/// Point-in-time view of the ledger for one account.
///
/// Every field can be stale as soon as it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub account: Address,
    pub balance: U256,
    pub claim_amount: U256,
    pub remaining_supply: U256,
    pub can_claim: bool,
    pub has_claimed: bool,
}

impl Snapshot {
    /// Best guess at why [`Snapshot::can_claim`] is false.
    pub fn blocker(&self) -> Option<RejectReason> {
        if self.can_claim {
            None
        } else if self.has_claimed {
            Some(RejectReason::AlreadyClaimed {
                account: self.account,
            })
        } else {
            Some(RejectReason::SupplyExhausted {
                requested: self.claim_amount,
                remaining: self.remaining_supply,
            })
        }
    }
}

/// Progress of the most recent transaction sent through the portal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Pending(TxHash),
    Confirmed(TxHash),
    Failed(RejectReason),
}

/// What the wallet holder should be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimStatus {
    NotConnected,
    Loading,
    CanClaim { amount: U256 },
    AlreadyClaimed,
    Unavailable,
    Pending(TxHash),
    Confirmed { tx: TxHash, amount: U256 },
    Failed(RejectReason),
}

impl ClaimStatus {
    /// Combines the connection state, the last snapshot and the last
    /// submission. In-flight and failed submissions win over the snapshot.
    pub fn derive(
        account: Option<Address>,
        snapshot: Option<&Snapshot>,
        submission: &Submission,
    ) -> Self {
        if account.is_none() {
            return Self::NotConnected;
        }
        match submission {
            Submission::Pending(tx) => return Self::Pending(*tx),
            Submission::Failed(reason) => return Self::Failed(reason.clone()),
            _ => {}
        }
        let Some(snapshot) = snapshot else {
            return Self::Loading;
        };
        if let Submission::Confirmed(tx) = submission {
            return Self::Confirmed {
                tx: *tx,
                amount: snapshot.claim_amount,
            };
        }
        if snapshot.can_claim {
            Self::CanClaim {
                amount: snapshot.claim_amount,
            }
        } else if snapshot.has_claimed {
            Self::AlreadyClaimed
        } else {
            Self::Unavailable
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading | Self::Pending(_))
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConnected => write!(f, "Please connect your wallet to continue"),
            Self::Loading => write!(f, "Checking claim status..."),
            Self::CanClaim { amount } => {
                write!(f, "You can claim {} tokens now!", format_tokens(*amount))
            }
            Self::AlreadyClaimed => write!(f, "You have already claimed your tokens"),
            Self::Unavailable => write!(f, "Claim not available"),
            Self::Pending(tx) => write!(f, "Waiting for confirmation of {tx}..."),
            Self::Confirmed { amount, .. } => {
                write!(f, "{} tokens claimed successfully!", format_tokens(*amount))
            }
            Self::Failed(reason) => write!(f, "{reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256, utils::parse_ether};
    use pretty_assertions::assert_eq;

    use super::*;

    const ACCOUNT: Address = address!("0x2000000000000000000000000000000000000002");
    const TX: TxHash = b256!("0x1111111111111111111111111111111111111111111111111111111111111111");

    fn snapshot(can_claim: bool, has_claimed: bool) -> Snapshot {
        Snapshot {
            account: ACCOUNT,
            balance: U256::ZERO,
            claim_amount: parse_ether("10").unwrap(),
            remaining_supply: parse_ether("990000").unwrap(),
            can_claim,
            has_claimed,
        }
    }

    #[test]
    fn not_connected_wins() {
        let status = ClaimStatus::derive(None, Some(&snapshot(true, false)), &Submission::Idle);
        assert_eq!(status, ClaimStatus::NotConnected);
        assert_eq!(status.to_string(), "Please connect your wallet to continue");
    }

    #[test]
    fn loading_until_first_snapshot() {
        let status = ClaimStatus::derive(Some(ACCOUNT), None, &Submission::Idle);
        assert_eq!(status, ClaimStatus::Loading);
        assert!(!status.is_terminal());
    }

    #[test]
    fn eligibility_from_snapshot() {
        let status = ClaimStatus::derive(Some(ACCOUNT), Some(&snapshot(true, false)), &Submission::Idle);
        assert_eq!(status.to_string(), "You can claim 10 tokens now!");

        let status = ClaimStatus::derive(Some(ACCOUNT), Some(&snapshot(false, true)), &Submission::Idle);
        assert_eq!(status, ClaimStatus::AlreadyClaimed);

        let status = ClaimStatus::derive(Some(ACCOUNT), Some(&snapshot(false, false)), &Submission::Idle);
        assert_eq!(status, ClaimStatus::Unavailable);
        assert_eq!(status.to_string(), "Claim not available");
    }

    #[test]
    fn submission_overrides_snapshot() {
        let snap = snapshot(false, true);

        let status = ClaimStatus::derive(Some(ACCOUNT), Some(&snap), &Submission::Pending(TX));
        assert_eq!(status, ClaimStatus::Pending(TX));
        assert!(!status.is_terminal());

        let status = ClaimStatus::derive(Some(ACCOUNT), Some(&snap), &Submission::Confirmed(TX));
        assert_eq!(
            status,
            ClaimStatus::Confirmed {
                tx: TX,
                amount: snap.claim_amount
            }
        );

        let failed = Submission::Failed(RejectReason::AlreadyClaimed { account: ACCOUNT });
        let status = ClaimStatus::derive(Some(ACCOUNT), Some(&snap), &failed);
        assert_eq!(status.to_string(), "Address has already claimed tokens");
    }

    #[test]
    fn token_amounts_drop_trailing_zeros() {
        assert_eq!(format_tokens(parse_ether("10").unwrap()), "10");
        assert_eq!(format_tokens(parse_ether("0.5").unwrap()), "0.5");
        assert_eq!(format_tokens(U256::from(1)), "0.000000000000000001");
        assert_eq!(format_tokens(U256::ZERO), "0");
    }

    #[test]
    fn blocker_explains_ineligibility() {
        assert_eq!(snapshot(true, false).blocker(), None);
        assert_eq!(
            snapshot(false, true).blocker(),
            Some(RejectReason::AlreadyClaimed { account: ACCOUNT })
        );
        assert!(matches!(
            snapshot(false, false).blocker(),
            Some(RejectReason::SupplyExhausted { .. })
        ));
    }
}
