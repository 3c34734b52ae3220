//! State definitions for the NFT bridge contract.
//!
//! Relayer trust, replay, and rate limit state live in the `verification`
//! package. Custody here is per-token: the contract is the recorded owner of
//! every escrowed token id, so no running counter is kept.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// Whether the bridge is currently paused
    pub paused: bool,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:nft-bridge";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Collection allow-list
/// Key: CW721 contract address, Value: whether bridging is allowed
pub const COLLECTIONS: Map<&Addr, bool> = Map::new("collections");
