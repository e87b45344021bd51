// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The default endpoint for connections to a Stylus-enabled Arbitrum node.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8547";

/// Seconds between polls in `watch`.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 4;

/// Seconds to wait for a transaction receipt.
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 60;
