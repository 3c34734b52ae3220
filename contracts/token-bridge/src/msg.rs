//! Message types for the token bridge contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management
    pub admin: String,
    /// CW20 token contract this bridge escrows
    pub token: String,
    /// Maximum cumulative amount per rate window
    pub rate_limit: Uint128,
    /// Rate window duration in seconds (0 = rate limiting disabled)
    pub rate_window_seconds: u64,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Lock tokens for bridging to the paired deployment.
    ///
    /// The caller must have approved an allowance of at least `amount` for
    /// this contract on the configured CW20 token.
    ///
    /// Authorization: Anyone
    Deposit {
        /// Amount to escrow
        amount: Uint128,
        /// Destination chain identifier (must be non-zero)
        dest_chain_id: u64,
        /// Recipient account on the destination chain
        recipient: String,
        /// Caller-chosen message id correlating deposit and release
        /// (expected to be a hash of source transaction + nonce)
        message_id: String,
    },

    /// Release escrowed tokens for a deposit observed on the paired
    /// deployment. The transaction sender is the relayer and must be trusted.
    ///
    /// Authorization: Trusted relayer or admin
    Release {
        /// Message id from the source chain deposit
        message_id: String,
        /// Recipient address on this chain
        recipient: String,
        /// Amount to release
        amount: Uint128,
    },

    /// Grant or revoke relayer trust
    ///
    /// Authorization: Admin only
    SetTrustedRelayer { relayer: String, trusted: bool },

    /// Replace the rate limit configuration
    ///
    /// Authorization: Admin only
    SetRateLimit {
        /// Maximum cumulative amount per window
        limit: Uint128,
        /// Window duration in seconds (0 = disabled)
        window_seconds: u64,
    },

    /// Halt deposits and releases
    ///
    /// Authorization: Admin only
    Pause {},

    /// Resume deposits and releases
    ///
    /// Authorization: Admin only
    Unpause {},
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Total escrowed amount
    #[returns(LockedTotalResponse)]
    LockedTotal {},

    /// Whether a message id has been consumed by a release
    #[returns(ProcessedResponse)]
    IsProcessed { message_id: String },

    /// Whether an address is a trusted relayer
    #[returns(TrustedResponse)]
    IsTrusted { relayer: String },

    /// Rate limit configuration and live window state
    #[returns(RateLimitResponse)]
    RateLimit {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub token: Addr,
    pub paused: bool,
}

#[cw_serde]
pub struct LockedTotalResponse {
    pub locked_total: Uint128,
}

#[cw_serde]
pub struct ProcessedResponse {
    pub message_id: String,
    pub processed: bool,
}

#[cw_serde]
pub struct TrustedResponse {
    pub relayer: Addr,
    pub trusted: bool,
}

#[cw_serde]
pub struct RateLimitResponse {
    /// Maximum cumulative amount per window
    pub limit: Uint128,
    /// Window duration in seconds (0 = disabled)
    pub window_seconds: u64,
    /// Start of the current window, if one has been opened
    pub window_start: Option<Timestamp>,
    /// Amount consumed in the current window
    pub used: Uint128,
}
