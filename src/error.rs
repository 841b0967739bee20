//! Error definitions for the utility branded token.
//!
//! Messages are part of the public contract: callers and tests match on the
//! exact wording, and the order in which guards are checked determines which
//! message a call violating several preconditions reports.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Only organization or admin can call")]
    Unauthorized,

    #[error("CoGateway address should not be zero")]
    ZeroCoGateway,

    #[error("CoGateway address already set")]
    CoGatewayAlreadySet,

    #[error("CoGateway.utilityToken is required to be UBT address")]
    UtilityTokenMismatch,

    #[error("Only registered workers can call")]
    WorkerOnly,

    #[error("Internal actor address should not be zero")]
    ZeroInternalActor,

    #[error("Organization owner address should not be zero")]
    ZeroOwner,

    #[error("Worker address should not be zero")]
    ZeroWorker,
}
