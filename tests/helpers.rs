//! Shared test helpers
//!
//! This module provides the account provider, fixture builders, and
//! assertion helpers used by the integration tests.

use std::sync::Arc;

use utility_branded_token::{
    Address, Organization, TokenConfig, TokenError, UtilityBrandedToken,
};

// ============================================================================
// LOGGING
// ============================================================================

/// Initialize tracing for tests. Safe to call repeatedly.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// ACCOUNT PROVISIONING
// ============================================================================

/// Yields a fresh, unique, non-zero address per call.
pub struct AccountProvider {
    next: u64,
}

impl AccountProvider {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next unused address.
    pub fn get(&mut self) -> Address {
        let address = Address::from_low_u64(self.next);
        self.next += 1;
        address
    }
}

impl Default for AccountProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Fully wired token fixture: an organization with owner, admin, and one
/// registered worker, and a token with the given internal actors registered.
#[allow(dead_code)]
pub struct TokenSetup {
    pub token: UtilityBrandedToken,
    pub organization: Arc<Organization>,
    pub owner: Address,
    pub admin: Address,
    pub worker: Address,
}

/// Default token metadata for tests. Customize with struct update syntax:
/// ```
/// let config = TokenConfig {
///     symbol: "TST".to_string(),
///     ..default_token_config()
/// };
/// ```
#[allow(dead_code)]
pub fn default_token_config() -> TokenConfig {
    TokenConfig {
        symbol: "UBT".to_string(),
        name: "Utility Branded Token".to_string(),
        decimals: 18,
    }
}

/// Builds an organization, registers one worker, creates the token, and
/// registers the given internal actors through the worker.
#[allow(dead_code)]
pub async fn setup_utility_branded_token(
    provider: &mut AccountProvider,
    internal_actors: &[Address],
) -> TokenSetup {
    init_tracing();

    let owner = provider.get();
    let admin = provider.get();
    let worker = provider.get();

    let organization =
        Arc::new(Organization::new(owner, admin).expect("owner address is non-zero"));
    organization
        .set_worker(worker, &owner)
        .expect("owner can register workers");

    let token = UtilityBrandedToken::new(
        provider.get(),
        default_token_config(),
        organization.clone(),
    );
    token
        .register_internal_actors(internal_actors, &worker)
        .await
        .expect("worker can register internal actors");

    TokenSetup {
        token,
        organization,
        owner,
        admin,
        worker,
    }
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Assert that an operation failed with the expected error and that the
/// error renders the expected message.
#[allow(dead_code)]
pub fn expect_token_error(
    result: Result<(), TokenError>,
    expected: TokenError,
    expected_message: &str,
) {
    match result {
        Ok(()) => panic!("expected failure '{}', but the call succeeded", expected_message),
        Err(err) => {
            assert_eq!(err, expected, "unexpected error kind");
            assert_eq!(err.to_string(), expected_message, "unexpected error message");
        }
    }
}
