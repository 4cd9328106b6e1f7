#![cfg(test)]

use crate::{LpToken, LpTokenClient, LpTokenError};
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger as _},
    Address, Env, String,
};

fn create_lp_token<'a>(env: &Env, admin: &Address) -> LpTokenClient<'a> {
    let client = LpTokenClient::new(env, &env.register_contract(None, LpToken));
    client.initialize(
        admin,
        &7,
        &String::from_str(env, "Coral Pool Share"),
        &String::from_str(env, "CPS"),
    );
    client
}

#[test]
fn initialize_stores_metadata() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let token = create_lp_token(&env, &admin);

    assert_eq!(token.decimals(), 7);
    assert_eq!(token.name(), String::from_str(&env, "Coral Pool Share"));
    assert_eq!(token.symbol(), String::from_str(&env, "CPS"));
    assert_eq!(token.total_supply(), 0);
}

#[test]
fn double_initialize_fails() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let token = create_lp_token(&env, &admin);

    let result = token.try_initialize(
        &admin,
        &7,
        &String::from_str(&env, "Again"),
        &String::from_str(&env, "AGN"),
    );
    assert_eq!(result, Err(Ok(LpTokenError::AlreadyInitialized)));
}

#[test]
fn mint_and_burn_track_supply() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_lp_token(&env, &admin);

    token.mint(&holder, &1_000);
    assert_eq!(token.balance(&holder), 1_000);
    assert_eq!(token.total_supply(), 1_000);

    token.burn(&holder, &400);
    assert_eq!(token.balance(&holder), 600);
    assert_eq!(token.total_supply(), 600);
}

#[test]
fn mint_requires_admin_auth() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_lp_token(&env, &admin);

    // No auths mocked: the admin signature is missing.
    assert!(token.try_mint(&holder, &1_000).is_err());
    assert_eq!(token.total_supply(), 0);
}

#[test]
fn transfer_moves_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let token = create_lp_token(&env, &admin);

    token.mint(&alice, &500);
    token.transfer(&alice, &bob, &200);

    assert_eq!(token.balance(&alice), 300);
    assert_eq!(token.balance(&bob), 200);

    let result = token.try_transfer(&alice, &bob, &301);
    assert_eq!(result, Err(Ok(LpTokenError::InsufficientBalance)));
}

#[test]
fn transfer_from_spends_allowance() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let recipient = Address::generate(&env);
    let token = create_lp_token(&env, &admin);

    token.mint(&owner, &1_000);
    token.approve(&owner, &spender, &300, &100);
    assert_eq!(token.allowance(&owner, &spender), 300);

    token.transfer_from(&spender, &owner, &recipient, &200);
    assert_eq!(token.allowance(&owner, &spender), 100);
    assert_eq!(token.balance(&recipient), 200);
    assert_eq!(token.balance(&owner), 800);

    let result = token.try_transfer_from(&spender, &owner, &recipient, &101);
    assert_eq!(result, Err(Ok(LpTokenError::InsufficientAllowance)));
}

#[test]
fn allowance_expires_after_expiration_ledger() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let token = create_lp_token(&env, &admin);

    env.ledger().set_sequence_number(10);
    token.approve(&owner, &spender, &300, &20);
    assert_eq!(token.allowance(&owner, &spender), 300);

    env.ledger().set_sequence_number(21);
    assert_eq!(token.allowance(&owner, &spender), 0);
}

#[test]
fn approve_with_past_expiration_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let token = create_lp_token(&env, &admin);

    env.ledger().set_sequence_number(50);
    let result = token.try_approve(&owner, &spender, &300, &49);
    assert_eq!(result, Err(Ok(LpTokenError::InvalidExpiration)));
}

#[test]
fn burn_from_reduces_supply_and_allowance() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let token = create_lp_token(&env, &admin);

    token.mint(&owner, &1_000);
    token.approve(&owner, &spender, &500, &100);
    token.burn_from(&spender, &owner, &500);

    assert_eq!(token.balance(&owner), 500);
    assert_eq!(token.total_supply(), 500);
    assert_eq!(token.allowance(&owner, &spender), 0);
}

#[test]
fn negative_amounts_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_lp_token(&env, &admin);

    assert_eq!(token.try_mint(&holder, &-1), Err(Ok(LpTokenError::NegativeAmount)));
    assert_eq!(
        token.try_transfer(&holder, &admin, &-1),
        Err(Ok(LpTokenError::NegativeAmount))
    );
}

#[test]
fn transfer_publishes_event() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let token = create_lp_token(&env, &admin);

    token.mint(&alice, &10);
    token.transfer(&alice, &bob, &10);

    assert!(!env.events().all().is_empty(), "transfer must publish an event");
}
