// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{utils::parse_ether, Address};
use claim_portal::{format_tokens, ClaimPortal};
use eyre::Context;

use crate::{
    cli_error::ClaimPortalResult,
    common_args::{AuthArgs, ProviderArgs, TokenArgs},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Address receiving the minted tokens
    recipient: Address,
    /// Amount in whole tokens, e.g. `5000` or `0.5`
    amount: String,

    #[command(flatten)]
    token: TokenArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> ClaimPortalResult {
    let amount = parse_ether(&args.amount).wrap_err("invalid token amount")?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let mut portal = ClaimPortal::new(args.token.connect(provider));

    let tx = portal.owner_mint(args.recipient, amount).await?;
    println!(
        "minted {} tokens to {} in {tx}",
        format_tokens(amount),
        args.recipient
    );
    Ok(())
}
