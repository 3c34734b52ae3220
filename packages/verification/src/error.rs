//! Error types for the verification policy.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum VerificationError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Untrusted relayer: {relayer}")]
    UntrustedRelayer { relayer: String },

    #[error("Message already processed: {message_id}")]
    AlreadyProcessed { message_id: String },

    #[error("Rate limit exceeded: window limit is {limit}, requested {requested}")]
    RateLimitExceeded { limit: Uint128, requested: Uint128 },
}
