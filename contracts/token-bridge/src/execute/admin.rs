//! Admin handlers: relayer trust, rate limit, and pause management.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Grant or revoke relayer trust.
pub fn execute_set_trusted_relayer(
    deps: DepsMut,
    info: MessageInfo,
    relayer: String,
    trusted: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    verification::assert_admin(&info.sender, &config.admin)?;

    let relayer_addr = deps.api.addr_validate(&relayer)?;
    verification::set_trusted_relayer(deps.storage, &relayer_addr, trusted)?;

    Ok(Response::new()
        .add_attribute("method", "trusted_relayer_updated")
        .add_attribute("relayer", relayer_addr)
        .add_attribute("trusted", trusted.to_string()))
}

/// Replace the rate limit configuration.
pub fn execute_set_rate_limit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    limit: Uint128,
    window_seconds: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    verification::assert_admin(&info.sender, &config.admin)?;

    verification::set_rate_limit(deps.storage, &env, limit, window_seconds)?;

    Ok(Response::new()
        .add_attribute("method", "rate_limit_updated")
        .add_attribute("limit", limit.to_string())
        .add_attribute("window_seconds", window_seconds.to_string()))
}

/// Halt deposits and releases.
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    verification::assert_admin(&info.sender, &config.admin)?;

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "paused"))
}

/// Resume deposits and releases.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    verification::assert_admin(&info.sender, &config.admin)?;

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "unpaused"))
}
