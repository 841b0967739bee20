//! Co-Gateway Peer Module
//!
//! The co-gateway is the companion cross-chain contract a utility branded
//! token binds to. From the token's perspective it is an external, read-only
//! collaborator: the token never mutates it, it only observes the gateway's
//! own address and the utility token address the gateway was constructed
//! against.

use crate::address::Address;

/// Read-only view of a co-gateway candidate.
///
/// The token consults this interface during binding; test doubles and
/// alternative gateway implementations plug in here.
pub trait CoGatewayInterface: Send + Sync {
    /// The gateway's own account address.
    fn address(&self) -> Address;

    /// The utility token address this gateway claims to serve, fixed at the
    /// gateway's construction.
    fn utility_token(&self) -> Address;
}

/// Concrete co-gateway handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoGateway {
    address: Address,
    utility_token: Address,
}

impl CoGateway {
    /// Creates a gateway handle serving `utility_token` at `address`.
    pub fn new(address: Address, utility_token: Address) -> Self {
        Self {
            address,
            utility_token,
        }
    }
}

impl CoGatewayInterface for CoGateway {
    fn address(&self) -> Address {
        self.address
    }

    fn utility_token(&self) -> Address {
        self.utility_token
    }
}
