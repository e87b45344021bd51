// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use claim_portal::{ClaimPortal, ClaimStatus, ClaimTokenApi, Submission};

use crate::{
    cli_error::ClaimPortalResult,
    common_args::{AuthArgs, ProviderArgs, TokenArgs},
    utils::{print_snapshot, print_status},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Account to inspect. Defaults to the connected wallet.
    #[arg(long)]
    account: Option<Address>,

    #[command(flatten)]
    token: TokenArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> ClaimPortalResult {
    if args.auth.is_connected() {
        let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
        report(ClaimPortal::new(args.token.connect(provider)), args.account).await
    } else {
        let provider = args.provider.build_provider().await?;
        report(
            ClaimPortal::new(args.token.bind(provider, args.account)),
            args.account,
        )
        .await
    }
}

async fn report<A: ClaimTokenApi>(
    mut portal: ClaimPortal<A>,
    account: Option<Address>,
) -> ClaimPortalResult {
    match account {
        Some(account) if portal.account() != Some(account) => {
            let snapshot = portal.inspect(account).await?;
            print_snapshot(&snapshot);
            print_status(&ClaimStatus::derive(
                Some(account),
                Some(&snapshot),
                &Submission::Idle,
            ));
        }
        _ if portal.account().is_some() => {
            print_snapshot(portal.refresh().await?);
            print_status(&portal.status());
        }
        _ => print_status(&portal.status()),
    }
    Ok(())
}
