// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use claim_portal::PortalError;

pub type ClaimPortalResult = Result<(), ClaimPortalError>;

/// Exit code when the ledger refuses the request.
const REJECTED: u8 = 2;

#[derive(Debug)]
pub struct ClaimPortalError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl ClaimPortalError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for ClaimPortalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for ClaimPortalError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for ClaimPortalError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<PortalError> for ClaimPortalError {
    fn from(err: PortalError) -> Self {
        let exit_code = match err {
            PortalError::Rejected(_) => ExitCode::from(REJECTED),
            _ => ExitCode::FAILURE,
        };
        Self {
            error: err.into(),
            exit_code,
        }
    }
}
