//! Query handlers for the token bridge contract.

use cosmwasm_std::{Deps, StdResult, Uint128};

use crate::msg::{
    ConfigResponse, LockedTotalResponse, ProcessedResponse, RateLimitResponse, TrustedResponse,
};
use crate::state::{CONFIG, LOCKED_TOTAL};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        token: config.token,
        paused: config.paused,
    })
}

pub fn query_locked_total(deps: Deps) -> StdResult<LockedTotalResponse> {
    let locked_total = LOCKED_TOTAL.load(deps.storage)?;
    Ok(LockedTotalResponse { locked_total })
}

pub fn query_is_processed(deps: Deps, message_id: String) -> StdResult<ProcessedResponse> {
    let processed = verification::is_processed(deps.storage, &message_id)?;
    Ok(ProcessedResponse {
        message_id,
        processed,
    })
}

pub fn query_is_trusted(deps: Deps, relayer: String) -> StdResult<TrustedResponse> {
    let relayer = deps.api.addr_validate(&relayer)?;
    let trusted = verification::is_trusted(deps.storage, &relayer)?;
    Ok(TrustedResponse { relayer, trusted })
}

pub fn query_rate_limit(deps: Deps) -> StdResult<RateLimitResponse> {
    let (config, window) = verification::current_window(deps.storage)?;
    let (limit, window_seconds) = config
        .map(|c| (c.limit, c.window_seconds))
        .unwrap_or((Uint128::zero(), 0));

    Ok(RateLimitResponse {
        limit,
        window_seconds,
        window_start: window.as_ref().map(|w| w.window_start),
        used: window.map(|w| w.used).unwrap_or_default(),
    })
}
