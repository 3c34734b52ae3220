//! Query handlers for the NFT bridge contract.

use cosmwasm_std::{Deps, StdResult, Uint128};

use crate::msg::{
    CollectionSupportedResponse, ConfigResponse, ProcessedResponse, RateLimitResponse,
    TrustedResponse,
};
use crate::state::{COLLECTIONS, CONFIG};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        paused: config.paused,
    })
}

pub fn query_is_collection_supported(
    deps: Deps,
    collection: String,
) -> StdResult<CollectionSupportedResponse> {
    let collection = deps.api.addr_validate(&collection)?;
    let supported = COLLECTIONS
        .may_load(deps.storage, &collection)?
        .unwrap_or(false);
    Ok(CollectionSupportedResponse {
        collection,
        supported,
    })
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
