//! Token bridge contract entry points.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_deposit, execute_pause, execute_release, execute_set_rate_limit,
    execute_set_trusted_relayer, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_is_processed, query_is_trusted, query_locked_total, query_rate_limit,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, LOCKED_TOTAL};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let token = deps.api.addr_validate(&msg.token)?;

    let config = Config {
        admin,
        token,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;
    LOCKED_TOTAL.save(deps.storage, &Uint128::zero())?;

    verification::set_rate_limit(deps.storage, &env, msg.rate_limit, msg.rate_window_seconds)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("token", config.token)
        .add_attribute("rate_limit", msg.rate_limit.to_string())
        .add_attribute("rate_window_seconds", msg.rate_window_seconds.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit {
            amount,
            dest_chain_id,
            recipient,
            message_id,
        } => execute_deposit(deps, env, info, amount, dest_chain_id, recipient, message_id),
        ExecuteMsg::Release {
            message_id,
            recipient,
            amount,
        } => execute_release(deps, env, info, message_id, recipient, amount),
        ExecuteMsg::SetTrustedRelayer { relayer, trusted } => {
            execute_set_trusted_relayer(deps, info, relayer, trusted)
        }
        ExecuteMsg::SetRateLimit {
            limit,
            window_seconds,
        } => execute_set_rate_limit(deps, env, info, limit, window_seconds),
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::LockedTotal {} => to_json_binary(&query_locked_total(deps)?),
        QueryMsg::IsProcessed { message_id } => {
            to_json_binary(&query_is_processed(deps, message_id)?)
        }
        QueryMsg::IsTrusted { relayer } => to_json_binary(&query_is_trusted(deps, relayer)?),
        QueryMsg::RateLimit {} => to_json_binary(&query_rate_limit(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
