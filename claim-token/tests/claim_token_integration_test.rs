// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

#[cfg(feature = "integration-tests")]
mod integration_test {
    use alloy::{
        network::{EthereumWallet, TransactionBuilder},
        primitives::{utils::parse_ether, Address, U256},
        providers::{Provider, ProviderBuilder},
        rpc::types::TransactionRequest,
        signers::local::PrivateKeySigner,
    };
    use claim_portal::{
        decode_contract_error, ClaimPortal, ClaimStatus, IClaimToken, PortalError, RejectReason,
        RpcClaimToken,
    };
    use claim_token::{CLAIM_AMOUNT, INITIAL_SUPPLY, MAX_TOTAL_SUPPLY};
    use eyre::{bail, Result};
    use stylus_tools::devnet::{Node, DEVNET_PRIVATE_KEY};

    use IClaimToken::IClaimTokenErrors;

    /// Deploys a fresh token owned by the devnet chain owner.
    async fn deploy(devnode: &Node) -> Result<Address> {
        let owner = devnode_owner()?;
        let (address, _, _) = stylus_tools::Deployer::builder()
            .rpc(devnode.rpc())
            .constructor_args(vec![
                "ClaimToken".to_owned(),
                "CLAIM".to_owned(),
                owner.to_string(),
            ])
            .build()
            .deploy()?;
        println!("Deployed ClaimToken to {address}");
        Ok(address)
    }

    fn devnode_owner() -> Result<Address> {
        let signer: PrivateKeySigner = DEVNET_PRIVATE_KEY.parse()?;
        Ok(signer.address())
    }

    /// Creates a funded account and a provider that signs with it.
    async fn funded_user(devnode: &Node) -> Result<(Address, impl Provider)> {
        let signer = PrivateKeySigner::random();
        let address = signer.address();

        let funder = devnode.create_provider().await?;
        let tx = TransactionRequest::default()
            .with_to(address)
            .with_value(parse_ether("1")?);
        funder.send_transaction(tx).await?.watch().await?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(devnode.rpc())
            .await?;
        Ok((address, provider))
    }

    fn whole_tokens(n: u64) -> U256 {
        U256::from(n) * U256::from(10).pow(U256::from(18))
    }

    #[tokio::test]
    async fn claim_token() -> Result<()> {
        let devnode = Node::new().await?;
        let address = deploy(&devnode).await?;
        let owner = devnode_owner()?;

        let provider = devnode.create_provider().await?;
        let token = IClaimToken::new(address, &provider);

        // Construction
        assert_eq!(token.owner().call().await?, owner);
        assert_eq!(token.name().call().await?, "ClaimToken");
        assert_eq!(token.symbol().call().await?, "CLAIM");
        assert_eq!(token.decimals().call().await?, 18);
        assert_eq!(token.balanceOf(owner).call().await?, whole_tokens(10_000));
        assert_eq!(token.totalSupply().call().await?, INITIAL_SUPPLY);
        assert_eq!(token.MAX_TOTAL_SUPPLY().call().await?, MAX_TOTAL_SUPPLY);
        assert_eq!(token.getClaimAmount().call().await?, whole_tokens(10));

        // First claim
        let (user1, user1_provider) = funded_user(&devnode).await?;
        let user1_token = IClaimToken::new(address, &user1_provider);
        assert!(user1_token.canClaimTokens(user1).call().await?);
        let receipt = user1_token
            .claimTokens()
            .send()
            .await?
            .get_receipt()
            .await?;
        let claimed = receipt
            .inner
            .logs()
            .iter()
            .find_map(|log| log.log_decode::<IClaimToken::TokensClaimed>().ok())
            .expect("claim should emit TokensClaimed");
        assert_eq!(claimed.inner.data.claimer, user1);
        assert_eq!(claimed.inner.data.amount, CLAIM_AMOUNT);
        assert_eq!(token.balanceOf(user1).call().await?, whole_tokens(10));
        assert!(token.hasClaimed(user1).call().await?);
        assert!(!token.canClaimTokens(user1).call().await?);

        // Second claim by the same address
        let Err(err) = user1_token.claimTokens().call().await else {
            bail!("second claim should revert");
        };
        match decode_contract_error::<IClaimTokenErrors>(err)? {
            IClaimTokenErrors::AlreadyClaimed(e) => assert_eq!(e.account, user1),
            _ => bail!("expected AlreadyClaimed"),
        }
        assert_eq!(token.balanceOf(user1).call().await?, whole_tokens(10));

        // An independent claimer
        let (user2, user2_provider) = funded_user(&devnode).await?;
        let user2_token = IClaimToken::new(address, &user2_provider);
        user2_token.claimTokens().send().await?.watch().await?;
        assert_eq!(token.balanceOf(user2).call().await?, whole_tokens(10));

        // Only the owner may mint
        let Err(err) = user1_token
            .ownerMint(user2, whole_tokens(5_000))
            .call()
            .await
        else {
            bail!("non-owner mint should revert");
        };
        assert!(matches!(
            decode_contract_error::<IClaimTokenErrors>(err)?,
            IClaimTokenErrors::OwnableUnauthorizedAccount(_)
        ));

        // Leave five tokens of headroom, then a claim no longer fits
        let remaining = token.getRemainingSupply().call().await?;
        token
            .ownerMint(user1, remaining - whole_tokens(5))
            .send()
            .await?
            .watch()
            .await?;
        assert_eq!(token.getRemainingSupply().call().await?, whole_tokens(5));

        let (user3, user3_provider) = funded_user(&devnode).await?;
        let user3_token = IClaimToken::new(address, &user3_provider);
        assert!(!token.canClaimTokens(user3).call().await?);
        let Err(err) = user3_token.claimTokens().call().await else {
            bail!("claim over the cap should revert");
        };
        match decode_contract_error::<IClaimTokenErrors>(err)? {
            IClaimTokenErrors::SupplyExhausted(e) => {
                assert_eq!(e.requested, CLAIM_AMOUNT);
                assert_eq!(e.remaining, whole_tokens(5));
            }
            _ => bail!("expected SupplyExhausted"),
        }
        assert!(token.totalSupply().call().await? <= MAX_TOTAL_SUPPLY);

        Ok(())
    }

    #[tokio::test]
    async fn claim_portal() -> Result<()> {
        let devnode = Node::new().await?;
        let address = deploy(&devnode).await?;

        let (user, provider) = funded_user(&devnode).await?;
        let mut portal = ClaimPortal::new(RpcClaimToken::new(address, provider, Some(user)));
        assert_eq!(portal.status(), ClaimStatus::Loading);

        let snapshot = portal.refresh().await?;
        assert_eq!(snapshot.balance, U256::ZERO);
        assert_eq!(snapshot.claim_amount, CLAIM_AMOUNT);
        assert_eq!(snapshot.remaining_supply, MAX_TOTAL_SUPPLY - INITIAL_SUPPLY);
        assert_eq!(
            portal.status(),
            ClaimStatus::CanClaim {
                amount: CLAIM_AMOUNT
            }
        );

        let tx = portal.claim().await?;
        assert_eq!(
            portal.status(),
            ClaimStatus::Confirmed {
                tx,
                amount: CLAIM_AMOUNT
            }
        );
        let Some(snapshot) = portal.snapshot() else {
            bail!("confirmed claim should leave a snapshot");
        };
        assert_eq!(snapshot.balance, CLAIM_AMOUNT);
        assert!(snapshot.has_claimed);

        // The ledger rejects a claim even when the local view is stale.
        let (_, provider) = funded_user(&devnode).await?;
        let stale = ClaimPortal::new(RpcClaimToken::new(address, provider, Some(user)));
        let Err(err) = stale.api().submit_claim().await else {
            bail!("second claim should be rejected");
        };
        assert!(matches!(
            err,
            PortalError::Rejected(RejectReason::AlreadyClaimed { account }) if account == user
        ));
        assert_eq!(err.to_string(), "Address has already claimed tokens");

        Ok(())
    }
}
