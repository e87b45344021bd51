// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::time::Duration;

use alloy::primitives::Address;
use claim_portal::ClaimPortal;
use log::{debug, warn};

use crate::{
    cli_error::ClaimPortalResult,
    common_args::{ProviderArgs, TokenArgs},
    constants::DEFAULT_POLL_INTERVAL_SECS,
    utils::print_status,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Account to watch
    account: Address,
    /// Seconds between polls
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECS)]
    interval: u64,

    #[command(flatten)]
    token: TokenArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> ClaimPortalResult {
    let provider = args.provider.build_provider().await?;
    let mut portal = ClaimPortal::new(args.token.bind(provider, Some(args.account)));
    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval.max(1)));

    print_status(&portal.status());
    let mut last = portal.status();
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                debug!("interrupted");
                return Ok(());
            }
        }
        // A failed poll keeps the previous snapshot.
        if let Err(err) = portal.refresh().await {
            warn!("poll failed: {err}");
            continue;
        }
        let status = portal.status();
        if status != last {
            print_status(&status);
            last = status;
        }
    }
}
