//! Error types for the NFT bridge contract.

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

    #[error("Collection not supported: {collection}")]
    CollectionNotSupported { collection: String },

    #[error("Invalid destination chain: {chain_id}")]
    InvalidDestination { chain_id: u64 },
}
