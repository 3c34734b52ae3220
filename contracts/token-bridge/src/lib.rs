//! Token Bridge Contract - Cross-Chain Transfers for a CW20 Token
//!
//! This contract escrows a single configured CW20 token for bridging to a
//! paired deployment on another chain.
//!
//! # Outgoing Flow (Deposit)
//! 1. User approves an allowance for this contract, then calls `Deposit`
//! 2. The contract pulls the tokens into escrow and emits a bridge request
//!    tagged with the caller-chosen message id
//! 3. An off-chain relayer observes the event and submits the release on the
//!    paired deployment
//!
//! # Incoming Flow (Release)
//! 1. A trusted relayer calls `Release` with the message id from the source
//!    chain deposit
//! 2. The contract checks relayer trust, replay status, and the rate budget
//! 3. Escrowed tokens are transferred to the recipient; the message id is
//!    consumed forever
//!
//! # Security
//! - Per-message replay protection (at most one release per message id)
//! - Admin-managed relayer trust registry
//! - Sliding-window rate limiting across deposits and releases
//! - Emergency pause functionality

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
