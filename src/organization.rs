//! Organization Access Control Module
//!
//! This module provides the authority collaborator consulted by the token:
//! owner/admin capability checks and a worker registry. The token depends
//! only on the `OrganizationInterface` trait, so test doubles can stand in
//! for the concrete `Organization`.

use std::collections::HashSet;
use std::sync::RwLock;

use tracing::info;

use crate::address::Address;
use crate::error::TokenError;

/// Capability queries the token consults before state-changing operations.
pub trait OrganizationInterface: Send + Sync {
    /// Whether the caller is the organization owner or its admin.
    fn is_organization_or_admin(&self, caller: &Address) -> bool;

    /// Whether the caller is a registered worker.
    fn is_worker(&self, caller: &Address) -> bool;
}

/// Concrete organization with an owner, an optional admin, and a worker
/// registry.
///
/// The owner and admin are fixed at construction. Workers are registered and
/// removed by the owner or admin; a zero admin address means no admin is set.
pub struct Organization {
    owner: Address,
    admin: Address,
    workers: RwLock<HashSet<Address>>,
}

impl Organization {
    /// Creates a new organization.
    ///
    /// # Arguments
    ///
    /// * `owner` - Owner address, must be non-zero
    /// * `admin` - Admin address; pass `Address::ZERO` to leave the admin unset
    ///
    /// # Returns
    ///
    /// * `Ok(Organization)` - Successfully created organization
    /// * `Err(TokenError::ZeroOwner)` - Owner address is zero
    pub fn new(owner: Address, admin: Address) -> Result<Self, TokenError> {
        if owner.is_zero() {
            return Err(TokenError::ZeroOwner);
        }

        info!(owner = %owner, admin = %admin, "organization created");
        Ok(Self {
            owner,
            admin,
            workers: RwLock::new(HashSet::new()),
        })
    }

    /// Returns the owner address.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Returns the admin address (zero when unset).
    pub fn admin(&self) -> Address {
        self.admin
    }

    /// Registers a worker. Idempotent: re-registering is not an error.
    ///
    /// # Arguments
    ///
    /// * `worker` - Worker address to register, must be non-zero
    /// * `caller` - Must be the owner or admin
    pub fn set_worker(&self, worker: Address, caller: &Address) -> Result<(), TokenError> {
        if !self.is_organization_or_admin(caller) {
            return Err(TokenError::Unauthorized);
        }
        if worker.is_zero() {
            return Err(TokenError::ZeroWorker);
        }

        let mut workers = self.workers.write().unwrap_or_else(|e| e.into_inner());
        if workers.insert(worker) {
            info!(worker = %worker, "worker registered");
        }
        Ok(())
    }

    /// Removes a worker.
    ///
    /// # Arguments
    ///
    /// * `worker` - Worker address to remove
    /// * `caller` - Must be the owner or admin
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The worker was registered and has been removed
    /// * `Ok(false)` - The worker was not registered
    /// * `Err(TokenError::Unauthorized)` - Caller is neither owner nor admin
    pub fn unset_worker(&self, worker: &Address, caller: &Address) -> Result<bool, TokenError> {
        if !self.is_organization_or_admin(caller) {
            return Err(TokenError::Unauthorized);
        }

        let mut workers = self.workers.write().unwrap_or_else(|e| e.into_inner());
        let removed = workers.remove(worker);
        if removed {
            info!(worker = %worker, "worker removed");
        }
        Ok(removed)
    }
}

impl OrganizationInterface for Organization {
    fn is_organization_or_admin(&self, caller: &Address) -> bool {
        // A zero admin means no admin is set and must never match a caller.
        *caller == self.owner || (!self.admin.is_zero() && *caller == self.admin)
    }

    fn is_worker(&self, caller: &Address) -> bool {
        let workers = self.workers.read().unwrap_or_else(|e| e.into_inner());
        workers.contains(caller)
    }
}
