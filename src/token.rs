//! Utility Branded Token Module
//!
//! This module provides the token entity that owns the one-time co-gateway
//! binding slot, the internal actor registry, and the audit event log. The
//! binding transition is organization-gated, validated against the gateway's
//! reciprocal utility-token reference, and committed together with its audit
//! event under a single write guard.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::address::Address;
use crate::config::TokenConfig;
use crate::error::TokenError;
use crate::events::{EventLog, TokenEvent};
use crate::gateway::CoGatewayInterface;
use crate::organization::OrganizationInterface;

// ============================================================================
// BINDING SLOT
// ============================================================================

/// Binding slot of the token's co-gateway reference.
///
/// The slot starts `Unbound` and moves to `Bound` at most once. `Bound` is
/// terminal: there is no transition out of it, not even to the same address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoGatewayBinding {
    Unbound,
    Bound(Address),
}

impl CoGatewayBinding {
    /// Returns the bound address, if any.
    pub fn co_gateway(&self) -> Option<Address> {
        match self {
            CoGatewayBinding::Unbound => None,
            CoGatewayBinding::Bound(address) => Some(*address),
        }
    }

    /// Whether the slot holds a binding.
    pub fn is_bound(&self) -> bool {
        matches!(self, CoGatewayBinding::Bound(_))
    }
}

// ============================================================================
// TOKEN ENTITY
// ============================================================================

/// Utility branded token entity.
///
/// Constructed once with its own address, metadata, and organization
/// authority; the co-gateway binding slot starts empty and is populated by a
/// single successful [`set_co_gateway`](UtilityBrandedToken::set_co_gateway)
/// call.
pub struct UtilityBrandedToken {
    /// The token's own account address
    address: Address,
    /// Token metadata (symbol, name, decimals)
    config: TokenConfig,
    /// Access control authority consulted before state-changing calls
    organization: Arc<dyn OrganizationInterface>,
    /// One-time co-gateway binding slot
    co_gateway: RwLock<CoGatewayBinding>,
    /// Addresses registered as internal actors
    internal_actors: RwLock<HashSet<Address>>,
    /// Append-only audit log of committed transitions
    events: EventLog,
}

impl UtilityBrandedToken {
    /// Creates a new token with an empty binding slot.
    pub fn new(
        address: Address,
        config: TokenConfig,
        organization: Arc<dyn OrganizationInterface>,
    ) -> Self {
        info!(token = %address, symbol = %config.symbol, "utility branded token created");
        Self {
            address,
            config,
            organization,
            co_gateway: RwLock::new(CoGatewayBinding::Unbound),
            internal_actors: RwLock::new(HashSet::new()),
            events: EventLog::new(),
        }
    }

    /// Returns the token's own account address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Returns the token symbol.
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Returns the human-readable token name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Returns the number of decimal places.
    pub fn decimals(&self) -> u8 {
        self.config.decimals
    }

    /// Returns the audit event log.
    pub fn event_log(&self) -> &EventLog {
        &self.events
    }

    /// Binds the co-gateway. Succeeds at most once per token.
    ///
    /// Guards are checked in a fixed order, and each failure carries its own
    /// pinned message:
    /// 1. `caller` must be the organization owner or admin
    /// 2. the candidate's address must be non-zero
    /// 3. the binding slot must still be unbound
    /// 4. the candidate's utility token must be this token's address
    ///
    /// On success the slot transitions to `Bound` and exactly one
    /// `CoGatewaySet` event is appended; a failed call changes nothing and
    /// appends nothing.
    ///
    /// # Arguments
    ///
    /// * `co_gateway` - Candidate gateway handle
    /// * `caller` - Identity of the invoking actor
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The binding was committed
    /// * `Err(TokenError)` - The first violated precondition, in guard order
    pub async fn set_co_gateway(
        &self,
        co_gateway: &dyn CoGatewayInterface,
        caller: &Address,
    ) -> Result<(), TokenError> {
        if !self.organization.is_organization_or_admin(caller) {
            warn!(
                token = %self.address,
                caller = %caller,
                "co-gateway binding rejected: caller is not organization or admin"
            );
            return Err(TokenError::Unauthorized);
        }

        let candidate = co_gateway.address();
        if candidate.is_zero() {
            warn!(token = %self.address, "co-gateway binding rejected: zero candidate address");
            return Err(TokenError::ZeroCoGateway);
        }

        // Read-check-write and the audit append all happen under this guard,
        // so racing callers observe exactly one committed transition.
        let mut binding = self.co_gateway.write().await;

        if binding.is_bound() {
            warn!(
                token = %self.address,
                candidate = %candidate,
                "co-gateway binding rejected: slot already bound"
            );
            return Err(TokenError::CoGatewayAlreadySet);
        }

        if co_gateway.utility_token() != self.address {
            warn!(
                token = %self.address,
                candidate = %candidate,
                claims = %co_gateway.utility_token(),
                "co-gateway binding rejected: gateway serves a different utility token"
            );
            return Err(TokenError::UtilityTokenMismatch);
        }

        *binding = CoGatewayBinding::Bound(candidate);
        self.events
            .append(TokenEvent::CoGatewaySet {
                co_gateway: candidate,
            })
            .await;

        info!(token = %self.address, co_gateway = %candidate, "co-gateway bound");
        Ok(())
    }

    /// Returns the bound co-gateway address, or `None` while unbound.
    ///
    /// Read-only; no access control.
    pub async fn co_gateway(&self) -> Option<Address> {
        let binding = self.co_gateway.read().await;
        binding.co_gateway()
    }

    /// Registers internal actors. Caller must be a registered worker.
    ///
    /// Already-registered actors are skipped without a second event. A zero
    /// address anywhere in the batch rejects the whole call before any actor
    /// is registered.
    ///
    /// # Arguments
    ///
    /// * `actors` - Addresses to register
    /// * `caller` - Identity of the invoking actor, must be a worker
    pub async fn register_internal_actors(
        &self,
        actors: &[Address],
        caller: &Address,
    ) -> Result<(), TokenError> {
        if !self.organization.is_worker(caller) {
            warn!(
                token = %self.address,
                caller = %caller,
                "internal actor registration rejected: caller is not a worker"
            );
            return Err(TokenError::WorkerOnly);
        }

        if actors.iter().any(Address::is_zero) {
            return Err(TokenError::ZeroInternalActor);
        }

        let mut registry = self.internal_actors.write().await;
        for actor in actors {
            if registry.insert(*actor) {
                self.events
                    .append(TokenEvent::InternalActorRegistered { actor: *actor })
                    .await;
                info!(token = %self.address, actor = %actor, "internal actor registered");
            }
        }
        Ok(())
    }

    /// Whether `actor` is registered as an internal actor.
    ///
    /// Read-only; no access control.
    pub async fn is_internal_actor(&self, actor: &Address) -> bool {
        let registry = self.internal_actors.read().await;
        registry.contains(actor)
    }
}
