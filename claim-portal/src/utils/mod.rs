// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use claim_portal::{format_tokens, ClaimStatus, Snapshot};

use style::{BOLD, ERROR, MUTED, SUCCESS, WARN};

mod style;

pub fn decode0x(text: impl AsRef<str>) -> eyre::Result<Vec<u8>> {
    let text = text.as_ref();
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    Ok(hex::decode(text)?)
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

pub fn print_snapshot(snapshot: &Snapshot) {
    println!("{BOLD}account{BOLD:#}:          {}", snapshot.account);
    println!(
        "{BOLD}balance{BOLD:#}:          {}",
        format_tokens(snapshot.balance)
    );
    println!(
        "{BOLD}claim amount{BOLD:#}:     {}",
        format_tokens(snapshot.claim_amount)
    );
    println!(
        "{BOLD}remaining supply{BOLD:#}: {}",
        format_tokens(snapshot.remaining_supply)
    );
    println!("{BOLD}has claimed{BOLD:#}:      {}", snapshot.has_claimed);
}

pub fn print_status(status: &ClaimStatus) {
    let style = match status {
        ClaimStatus::CanClaim { .. } | ClaimStatus::Confirmed { .. } => SUCCESS,
        ClaimStatus::Failed(_) => ERROR,
        ClaimStatus::AlreadyClaimed | ClaimStatus::Unavailable | ClaimStatus::NotConnected => WARN,
        ClaimStatus::Loading | ClaimStatus::Pending(_) => MUTED,
    };
    println!("{style}{status}{style:#}");
}
