#![cfg(test)]

use crate::{Router, RouterClient, RouterError};
use coralfarm_factory::{Factory, FactoryClient};
use coralfarm_lp_token::{LpToken, LpTokenClient};
use coralfarm_pair::Pair;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env, String,
};

const APPROVAL_LEDGERS: u32 = 1_000;

struct Setup<'a> {
    env: Env,
    router: RouterClient<'a>,
    token_a: TokenClient<'a>,
    token_b: TokenClient<'a>,
    lp: LpTokenClient<'a>,
    provider: Address,
}

impl<'a> Setup<'a> {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let provider = Address::generate(&env);

        let token_a = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let token_b = env.register_stellar_asset_contract_v2(admin.clone()).address();
        StellarAssetClient::new(&env, &token_a).mint(&provider, &10_000_000);
        StellarAssetClient::new(&env, &token_b).mint(&provider, &10_000_000);

        let factory = FactoryClient::new(&env, &env.register_contract(None, Factory));
        factory.initialize(&admin);

        let pair = env.register_contract(None, Pair);
        let lp = LpTokenClient::new(&env, &env.register_contract(None, LpToken));
        lp.initialize(
            &pair,
            &7,
            &String::from_str(&env, "Coral Pool Share"),
            &String::from_str(&env, "CPS"),
        );
        factory.create_pair(&token_a, &token_b, &pair, &lp.address);

        let router = RouterClient::new(&env, &env.register_contract(None, Router));
        router.initialize(&factory.address);

        Setup {
            router,
            token_a: TokenClient::new(&env, &token_a),
            token_b: TokenClient::new(&env, &token_b),
            lp,
            provider,
            env,
        }
    }

    fn deadline(&self) -> u64 {
        self.env.ledger().timestamp() + 1_000
    }

    fn approve_router(&self, amount_a: i128, amount_b: i128) {
        let expiration = self.env.ledger().sequence() + APPROVAL_LEDGERS;
        self.token_a.approve(&self.provider, &self.router.address, &amount_a, &expiration);
        self.token_b.approve(&self.provider, &self.router.address, &amount_b, &expiration);
    }

    fn seed(&self, amount_a: i128, amount_b: i128) -> i128 {
        self.approve_router(amount_a, amount_b);
        let (_, _, liquidity) = self.router.add_liquidity(
            &self.token_a.address,
            &self.token_b.address,
            &amount_a,
            &amount_b,
            &0,
            &0,
            &self.provider,
            &self.deadline(),
        );
        liquidity
    }
}

mod helper_tests {
    use crate::helpers::{optimal_amounts, quote};
    use crate::RouterError;

    #[test]
    fn quote_keeps_ratio() {
        assert_eq!(quote(100, 1_000, 2_000), Ok(200));
    }

    #[test]
    fn quote_rejects_empty_reserves() {
        assert_eq!(quote(100, 0, 2_000), Err(RouterError::InsufficientLiquidity));
    }

    #[test]
    fn quote_rejects_zero_amount() {
        assert_eq!(quote(0, 1_000, 1_000), Err(RouterError::ZeroAmount));
    }

    #[test]
    fn empty_pool_takes_desired_amounts() {
        assert_eq!(optimal_amounts(300, 700, 0, 0, 0, 0), Ok((300, 700)));
    }

    #[test]
    fn excess_b_is_trimmed() {
        // 100 A at 1:1 needs only 100 B.
        assert_eq!(optimal_amounts(100, 150, 0, 0, 1_000, 1_000), Ok((100, 100)));
    }

    #[test]
    fn excess_a_is_trimmed() {
        assert_eq!(optimal_amounts(150, 100, 0, 0, 1_000, 1_000), Ok((100, 100)));
    }

    #[test]
    fn minimum_b_enforced() {
        assert_eq!(
            optimal_amounts(100, 150, 0, 120, 1_000, 1_000),
            Err(RouterError::InsufficientBAmount)
        );
    }

    #[test]
    fn minimum_a_enforced() {
        assert_eq!(
            optimal_amounts(150, 100, 120, 0, 1_000, 1_000),
            Err(RouterError::InsufficientAAmount)
        );
    }
}

#[test]
fn test_initialize_twice_fails() {
    let setup = Setup::new();
    let result = setup.router.try_initialize(&Address::generate(&setup.env));
    assert_eq!(result, Err(Ok(RouterError::AlreadyInitialized)));
}

#[test]
fn test_add_liquidity_to_empty_pool() {
    let setup = Setup::new();

    let liquidity = setup.seed(1_000_000, 1_000_000);

    assert_eq!(liquidity, 999_000);
    assert_eq!(setup.lp.balance(&setup.provider), 999_000);
    assert_eq!(setup.token_a.balance(&setup.provider), 9_000_000);
    assert_eq!(setup.token_b.balance(&setup.provider), 9_000_000);
}

#[test]
fn test_add_liquidity_uses_optimal_amounts() {
    let setup = Setup::new();
    setup.seed(1_000_000, 1_000_000);

    setup.approve_router(500, 800);
    let (amount_a, amount_b, liquidity) = setup.router.add_liquidity(
        &setup.token_a.address,
        &setup.token_b.address,
        &500,
        &800,
        &0,
        &0,
        &setup.provider,
        &setup.deadline(),
    );

    assert_eq!((amount_a, amount_b, liquidity), (500, 500, 500));
    // Only the used amount leaves the provider.
    assert_eq!(setup.token_b.balance(&setup.provider), 9_000_000 - 500);
    assert_eq!(setup.token_b.allowance(&setup.provider, &setup.router.address), 300);
}

#[test]
fn test_add_liquidity_reversed_token_order() {
    let setup = Setup::new();
    setup.seed(1_000_000, 2_000_000);

    setup.approve_router(1_000, 1_000);
    let (amount_b, amount_a, _) = setup.router.add_liquidity(
        &setup.token_b.address,
        &setup.token_a.address,
        &1_000,
        &1_000,
        &0,
        &0,
        &setup.provider,
        &setup.deadline(),
    );

    // Pool is 1 A : 2 B.
    assert_eq!((amount_a, amount_b), (500, 1_000));
}

#[test]
fn test_add_liquidity_expired_deadline() {
    let setup = Setup::new();
    setup.env.ledger().set_timestamp(2_000);
    setup.approve_router(1_000, 1_000);

    let result = setup.router.try_add_liquidity(
        &setup.token_a.address,
        &setup.token_b.address,
        &1_000,
        &1_000,
        &0,
        &0,
        &setup.provider,
        &1_000,
    );
    assert_eq!(result, Err(Ok(RouterError::Expired)));
}

#[test]
fn test_add_liquidity_zero_amount() {
    let setup = Setup::new();

    let result = setup.router.try_add_liquidity(
        &setup.token_a.address,
        &setup.token_b.address,
        &0,
        &1_000,
        &0,
        &0,
        &setup.provider,
        &setup.deadline(),
    );
    assert_eq!(result, Err(Ok(RouterError::ZeroAmount)));
}

#[test]
fn test_add_liquidity_unknown_pair() {
    let setup = Setup::new();
    let other = setup
        .env
        .register_stellar_asset_contract_v2(Address::generate(&setup.env))
        .address();

    let result = setup.router.try_add_liquidity(
        &setup.token_a.address,
        &other,
        &1_000,
        &1_000,
        &0,
        &0,
        &setup.provider,
        &setup.deadline(),
    );
    assert_eq!(result, Err(Ok(RouterError::PairNotFound)));
}

#[test]
fn test_add_liquidity_slippage_rejected() {
    let setup = Setup::new();
    setup.seed(1_000_000, 1_000_000);
    setup.approve_router(500, 800);

    let result = setup.router.try_add_liquidity(
        &setup.token_a.address,
        &setup.token_b.address,
        &500,
        &800,
        &0,
        &600,
        &setup.provider,
        &setup.deadline(),
    );
    assert_eq!(result, Err(Ok(RouterError::InsufficientBAmount)));
}

#[test]
fn test_add_liquidity_without_allowance_fails() {
    let setup = Setup::new();

    let result = setup.router.try_add_liquidity(
        &setup.token_a.address,
        &setup.token_b.address,
        &1_000_000,
        &1_000_000,
        &0,
        &0,
        &setup.provider,
        &setup.deadline(),
    );
    assert!(result.is_err());
    assert_eq!(setup.token_a.balance(&setup.provider), 10_000_000);
}

#[test]
fn test_remove_liquidity_success() {
    let setup = Setup::new();
    let liquidity = setup.seed(1_000_000, 1_000_000);

    let expiration = setup.env.ledger().sequence() + APPROVAL_LEDGERS;
    setup.lp.approve(&setup.provider, &setup.router.address, &liquidity, &expiration);

    let (amount_a, amount_b) = setup.router.remove_liquidity(
        &setup.token_a.address,
        &setup.token_b.address,
        &liquidity,
        &0,
        &0,
        &setup.provider,
        &setup.deadline(),
    );

    assert_eq!((amount_a, amount_b), (999_000, 999_000));
    assert_eq!(setup.lp.balance(&setup.provider), 0);
    assert_eq!(setup.token_a.balance(&setup.provider), 9_999_000);
}

#[test]
fn test_remove_liquidity_expired_deadline() {
    let setup = Setup::new();
    setup.env.ledger().set_timestamp(2000);

    let past_deadline = setup.env.ledger().timestamp() - 1000;
    let result = setup.router.try_remove_liquidity(
        &setup.token_a.address,
        &setup.token_b.address,
        &100,
        &0,
        &0,
        &setup.provider,
        &past_deadline,
    );
    assert_eq!(result, Err(Ok(RouterError::Expired)));
}

#[test]
fn test_remove_liquidity_zero_amount() {
    let setup = Setup::new();

    let result = setup.router.try_remove_liquidity(
        &setup.token_a.address,
        &setup.token_b.address,
        &0,
        &0,
        &0,
        &setup.provider,
        &setup.deadline(),
    );
    assert_eq!(result, Err(Ok(RouterError::ZeroAmount)));
}

#[test]
fn test_remove_liquidity_minimum_enforced() {
    let setup = Setup::new();
    let liquidity = setup.seed(1_000_000, 1_000_000);

    let expiration = setup.env.ledger().sequence() + APPROVAL_LEDGERS;
    setup.lp.approve(&setup.provider, &setup.router.address, &liquidity, &expiration);

    let result = setup.router.try_remove_liquidity(
        &setup.token_a.address,
        &setup.token_b.address,
        &liquidity,
        &1_000_000,
        &0,
        &setup.provider,
        &setup.deadline(),
    );
    assert_eq!(result, Err(Ok(RouterError::InsufficientAAmount)));
    assert_eq!(setup.lp.balance(&setup.provider), liquidity);
}

#[test]
fn test_pair_for_and_quote_views() {
    let setup = Setup::new();

    let pair = setup.router.pair_for(&setup.token_a.address, &setup.token_b.address);
    assert_eq!(
        setup.router.pair_for(&setup.token_b.address, &setup.token_a.address),
        pair
    );
    assert_eq!(setup.router.quote(&10, &100, &300), 30);
    assert_eq!(
        setup.router.try_pair_for(&setup.token_a.address, &setup.token_a.address),
        Err(Ok(RouterError::IdenticalTokens))
    );
}
