//! State definitions for the token bridge contract.
//!
//! Relayer trust, replay, and rate limit state live in the `verification`
//! package; this module holds only the custody-side state.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// The CW20 token this bridge escrows
    pub token: Addr,
    /// Whether the bridge is currently paused
    pub paused: bool,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:token-bridge";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Total escrowed amount. Invariant: the contract's token balance is always
/// at least this value.
pub const LOCKED_TOTAL: Item<Uint128> = Item::new("locked_total");
