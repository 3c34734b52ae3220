//! Error types for the token bridge contract.

use cosmwasm_std::StdError;
use thiserror::Error;
use verification::VerificationError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Verification(#[from] VerificationError),

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Invalid amount: deposit amount must be positive")]
    InvalidAmount,

    #[error("Invalid destination chain: {chain_id}")]
    InvalidDestination { chain_id: u64 },
}
