// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use claim_portal::ClaimPortal;

use crate::{
    cli_error::ClaimPortalResult,
    common_args::{AuthArgs, ProviderArgs, TokenArgs},
    utils::{print_snapshot, print_status},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    token: TokenArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> ClaimPortalResult {
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let mut portal = ClaimPortal::new(args.token.connect(provider));

    portal.refresh().await?;
    print_status(&portal.status());

    portal.submit_claim().await?;
    print_status(&portal.status());

    portal.await_confirmation().await?;
    print_status(&portal.status());
    if let Some(snapshot) = portal.snapshot() {
        print_snapshot(snapshot);
    }
    Ok(())
}
