// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf, time::Duration};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, FixedBytes},
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use claim_portal::RpcClaimToken;
use eyre::{eyre, Context};

use crate::{
    constants::{DEFAULT_CONFIRMATION_TIMEOUT_SECS, DEFAULT_ENDPOINT},
    utils::decode0x,
};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long, env = "CLAIM_PORTAL_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    /// Whether any way of signing was supplied.
    pub fn is_connected(&self) -> bool {
        self.private_key.is_some() || self.private_key_path.is_some() || self.keystore_path.is_some()
    }

    fn build_signer(&self, chain_id: u64) -> eyre::Result<PrivateKeySigner> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return Ok(parse_private_key(key)?.with_chain_id(Some(chain_id)));
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return Ok(parse_private_key(key)?.with_chain_id(Some(chain_id)));
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!("no wallet configured"))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        Ok(LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id)))
    }
}

fn parse_private_key(key: impl AsRef<str>) -> eyre::Result<PrivateKeySigner> {
    let bytes = decode0x(key)?;
    let priv_key_bytes = FixedBytes::<32>::try_from(bytes.as_slice())
        .map_err(|_| eyre!("private key must be 32 bytes, got {}", bytes.len()))?;
    Ok(PrivateKeySigner::from_bytes(&priv_key_bytes)?)
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// Arbitrum RPC endpoint
    #[arg(short, long, default_value = DEFAULT_ENDPOINT, env = "CLAIM_PORTAL_ENDPOINT")]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let signer = auth.build_signer(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::new(signer))
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}

#[derive(Debug, clap::Args)]
pub struct TokenArgs {
    /// Address of the deployed claim token
    #[arg(long = "token", env = "CLAIM_TOKEN_ADDRESS")]
    pub address: Address,
    /// Seconds to wait for a transaction to be included
    #[arg(long, default_value_t = DEFAULT_CONFIRMATION_TIMEOUT_SECS)]
    pub confirmation_timeout: u64,
}

impl TokenArgs {
    /// Binds the token to a provider that signs as its default signer.
    pub fn connect<P: Provider + WalletProvider>(&self, provider: P) -> RpcClaimToken<P> {
        let account = provider.default_signer_address();
        self.bind(provider, Some(account))
    }

    /// Binds the token to a read-only provider, optionally on behalf of `account`.
    pub fn bind<P: Provider>(&self, provider: P, account: Option<Address>) -> RpcClaimToken<P> {
        RpcClaimToken::new(self.address, provider, account)
            .with_confirmation_timeout(Duration::from_secs(self.confirmation_timeout))
    }
}
