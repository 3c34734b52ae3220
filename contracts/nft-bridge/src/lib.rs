//! NFT Bridge Contract - Cross-Chain Transfers for CW721 Tokens
//!
//! This contract escrows individual CW721 token ids for bridging to a paired
//! deployment on another chain. Only collections on the admin-managed
//! allow-list can move through the bridge.
//!
//! # Outgoing Flow (Deposit)
//! 1. User approves this contract for the token id, then calls `Deposit`
//! 2. The contract takes ownership of the token and emits a bridge request
//!    tagged with the caller-chosen message id
//! 3. An off-chain relayer observes the event and submits the release on the
//!    paired deployment
//!
//! # Incoming Flow (Release)
//! 1. A trusted relayer calls `Release` with the message id from the source
//!    chain deposit
//! 2. The contract checks relayer trust, replay status, and the rate budget
//! 3. Ownership of the escrowed token id transfers to the recipient
//!
//! # Security
//! - Per-collection allow-list, checked before any ownership transfer
//! - Per-message replay protection (at most one release per message id)
//! - Admin-managed relayer trust registry
//! - Sliding-window rate limiting, one unit per NFT movement
//! - Emergency pause functionality

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
