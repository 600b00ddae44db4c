//! Withdraw tests: redemption pricing and pulling liquidity back from strategies.

#[cfg(test)]
mod tests {
    use crate::protocol::fixture::{default_vault_params, ProtocolFixture, DEFAULT_WALLET_BALANCE};
    use strategy::state::StrategyType;
    use vault_test_framework::prelude::*;

    fn setup_fixture() -> ProtocolFixture {
        let mut fixture = ProtocolFixture::new().expect("Failed to create protocol fixture");
        fixture
            .setup(default_vault_params())
            .expect("Failed to setup protocol");
        fixture
    }

    /// Alice deposits 1000; strategies 0 and 1 hold 400 each, linked in reverse index order.
    fn setup_two_strategies() -> ProtocolFixture {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();

        fixture.deposit(&alice, 1_000).expect("Failed to deposit");
        let first = fixture
            .init_strategy(&admin, StrategyType::Simple)
            .expect("Failed to init strategy");
        let second = fixture
            .init_strategy(&admin, StrategyType::Simple)
            .expect("Failed to init strategy");

        fixture
            .add_strategy(&admin, second, 1_000)
            .expect("Failed to add strategy");
        fixture
            .add_strategy(&admin, first, 1_000)
            .expect("Failed to add strategy");
        fixture
            .update_debt(&admin, first, 400)
            .expect("Failed to allocate");
        fixture
            .update_debt(&admin, second, 400)
            .expect("Failed to allocate");

        fixture
    }

    /// Test: Should cover a shortfall from strategies, lowest index first
    #[test]
    fn test_withdraw_pulls_lowest_index_first() {
        let mut fixture = setup_two_strategies();
        let alice = fixture.alice.insecure_clone();
        assert_eq!(fixture.vault_balance(), 200);

        fixture.withdraw(&alice, 700).unwrap();

        assert_eq!(fixture.current_debt(0).unwrap(), 0);
        assert_eq!(fixture.current_debt(1).unwrap(), 300);
        assert_eq!(fixture.read_strategy(0).unwrap().total_assets, 0);
        assert_eq!(fixture.read_strategy(1).unwrap().total_assets, 300);
        assert_eq!(fixture.strategy_balance(0), 0);
        assert_eq!(fixture.strategy_balance(1), 300);

        let vault = fixture.read_vault().unwrap();
        assert_eq!(vault.total_debt, 300);
        assert_eq!(vault.total_assets, 300);
        assert_eq!(fixture.vault_balance(), 0);
        assert_eq!(
            fixture.wallet_of(&alice.pubkey()),
            DEFAULT_WALLET_BALANCE - 300
        );
    }

    /// Test: Should not let the caller skip the head of the withdraw queue
    #[test]
    fn test_withdraw_rejects_out_of_order_strategies() {
        let mut fixture = setup_two_strategies();
        let alice = fixture.alice.insecure_clone();

        // strategy 1 alone could cover the shortfall, but strategy 0 drains first
        fixture.expect_revert_with("InvalidAccount", |f| {
            f.withdraw_with_strategies(&alice, 500, &[1])
        });
        fixture.expect_revert_with("InvalidAccount", |f| {
            f.withdraw_with_strategies(&alice, 500, &[1, 0])
        });

        // a partial prefix is fine while it covers the shortfall
        fixture.withdraw_with_strategies(&alice, 500, &[0]).unwrap();
        assert_eq!(fixture.current_debt(0).unwrap(), 100);
        assert_eq!(fixture.current_debt(1).unwrap(), 400);

        // and reports the omission when it does not
        fixture.expect_revert_with("InvalidAccount", |f| {
            f.withdraw_with_strategies(&alice, 300, &[0])
        });
        fixture.withdraw(&alice, 300).unwrap();
        assert_eq!(fixture.current_debt(0).unwrap(), 0);
        assert_eq!(fixture.current_debt(1).unwrap(), 200);
    }

    /// Test: Should fail when idle funds across strategies cannot cover the withdrawal
    #[test]
    fn test_withdraw_insufficient_liquidity() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();
        let keeper = fixture.keeper.insecure_clone();

        fixture.deposit(&alice, 1_000).unwrap();
        let slot = fixture.init_strategy(&admin, StrategyType::Tracked).unwrap();
        fixture.add_strategy(&admin, slot, 1_000).unwrap();
        fixture.update_debt(&admin, slot, 1_000).unwrap();

        let asset_mint = fixture.init_invest_tracker(&admin, slot).unwrap();
        fixture.deploy_funds(&keeper, slot, asset_mint, 600).unwrap();

        fixture.expect_revert_with("InsufficientLiquidity", |f| f.withdraw(&alice, 1_000));
        assert_eq!(fixture.shares_of(&alice.pubkey()), 1_000);
        assert_eq!(fixture.current_debt(slot).unwrap(), 1_000);

        // only the strategy's idle balance is reachable
        fixture.withdraw(&alice, 400).unwrap();
        assert_eq!(fixture.current_debt(slot).unwrap(), 600);
        assert_eq!(fixture.read_strategy(slot).unwrap().total_idle, 0);
        assert_eq!(
            fixture.wallet_of(&alice.pubkey()),
            DEFAULT_WALLET_BALANCE - 600
        );
    }

    /// Test: Should validate the share amount
    #[test]
    fn test_withdraw_share_checks() {
        let mut fixture = setup_fixture();
        let alice = fixture.alice.insecure_clone();
        let bob = fixture.bob.insecure_clone();

        fixture.deposit(&alice, 100).unwrap();

        fixture.expect_revert_with("ZeroAmount", |f| f.withdraw(&alice, 0));
        fixture.expect_revert_with("InsufficientShares", |f| f.withdraw(&alice, 101));

        // bob never deposited, so holds no shares account
        fixture.expect_revert_with("AccountNotInitialized", |f| f.withdraw(&bob, 50));
        assert_eq!(fixture.shares_of(&alice.pubkey()), 100);
    }

    /// Test: Should never return more than deposited on an immediate round trip
    #[test]
    fn test_round_trip_rounds_in_favour_of_vault() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();
        let bob = fixture.bob.insecure_clone();
        let keeper = fixture.keeper.insecure_clone();

        fixture.deposit(&alice, 1_000).unwrap();
        let slot = fixture.init_strategy(&admin, StrategyType::Simple).unwrap();
        fixture.add_strategy(&admin, slot, 1_000).unwrap();
        fixture.update_debt(&admin, slot, 1_000).unwrap();
        fixture.airdrop_to_strategy(slot, 100).unwrap();
        fixture.report(&keeper, slot).unwrap();
        fixture.process_report(&admin, slot).unwrap();

        // price 1100 / 1009
        fixture.deposit(&bob, 100).unwrap();
        let shares = fixture.shares_of(&bob.pubkey());
        assert_eq!(shares, 91);

        fixture.withdraw(&bob, shares).unwrap();
        assert_eq!(fixture.wallet_of(&bob.pubkey()), DEFAULT_WALLET_BALANCE - 1);
    }

    /// Test: Should redeem everything after strategies are unwound
    #[test]
    fn test_full_exit_after_deallocation() {
        let mut fixture = setup_fixture();
        let admin = fixture.admin.insecure_clone();
        let alice = fixture.alice.insecure_clone();
        let bob = fixture.bob.insecure_clone();

        fixture.deposit(&alice, 600).unwrap();
        fixture.deposit(&bob, 400).unwrap();
        let slot = fixture.init_strategy(&admin, StrategyType::Simple).unwrap();
        fixture.add_strategy(&admin, slot, 1_000).unwrap();
        fixture.update_debt(&admin, slot, 1_000).unwrap();

        fixture.update_debt(&admin, slot, 0).unwrap();
        assert_eq!(fixture.vault_balance(), 1_000);

        fixture.withdraw(&alice, 600).unwrap();
        fixture.withdraw(&bob, 400).unwrap();
        assert_eq!(fixture.wallet_of(&alice.pubkey()), DEFAULT_WALLET_BALANCE);
        assert_eq!(fixture.wallet_of(&bob.pubkey()), DEFAULT_WALLET_BALANCE);

        let vault = fixture.read_vault().unwrap();
        assert_eq!(vault.total_assets, 0);
        assert_eq!(vault.total_shares, 0);
        assert_eq!(fixture.vm.mint_supply(&fixture.get_shares_mint()).unwrap(), 0);
    }
}
