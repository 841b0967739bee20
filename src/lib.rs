//! Utility Branded Token Library
//!
//! This crate provides the utility branded token entity and its one-time
//! co-gateway binding protocol: an organization-gated state transition that
//! can be performed exactly once, validates the gateway's reciprocal
//! utility-token reference before committing, and records an audit event
//! for every committed transition.

pub mod address;
pub mod config;
pub mod error;
pub mod events;
pub mod gateway;
pub mod organization;
pub mod token;

// Re-export commonly used types
pub use address::{Address, AddressParseError};
pub use config::TokenConfig;
pub use error::TokenError;
pub use events::{EventLog, EventRecord, TokenEvent};
pub use gateway::{CoGateway, CoGatewayInterface};
pub use organization::{Organization, OrganizationInterface};
pub use token::{CoGatewayBinding, UtilityBrandedToken};
