// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::cli_error::ClaimPortalResult;

mod claim;
mod mint;
mod status;
mod watch;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Show an account's balance and whether it can claim
    #[clap(visible_alias = "s")]
    Status(status::Args),
    /// Claim tokens for the connected wallet
    #[clap(visible_alias = "c")]
    Claim(claim::Args),
    /// Poll an account's claim status until interrupted
    #[clap(visible_alias = "w")]
    Watch(watch::Args),
    /// Mint tokens as the token owner
    Mint(mint::Args),
}

pub async fn exec(cmd: Command) -> ClaimPortalResult {
    match cmd {
        Command::Status(args) => status::exec(args).await,
        Command::Claim(args) => claim::exec(args).await,
        Command::Watch(args) => watch::exec(args).await,
        Command::Mint(args) => mint::exec(args).await,
    }
}
