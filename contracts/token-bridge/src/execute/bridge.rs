//! Deposit and Release handlers.
//!
//! Storage writes and the CW20 transfer submessage commit atomically: any
//! failure, including a transfer rejected by the token contract, unwinds the
//! whole call with no partial mutation.

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{CONFIG, LOCKED_TOTAL};

/// Execute handler for locking tokens into escrow.
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    dest_chain_id: u64,
    recipient: String,
    message_id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    if dest_chain_id == 0 {
        return Err(ContractError::InvalidDestination {
            chain_id: dest_chain_id,
        });
    }

    verification::assert_and_consume_rate(deps.storage, &env, amount)?;

    let locked = LOCKED_TOTAL.load(deps.storage)?;
    LOCKED_TOTAL.save(deps.storage, &(locked + amount))?;

    // Pull the tokens from the caller; requires a pre-approved allowance
    let pull: CosmosMsg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into();

    Ok(Response::new()
        .add_message(pull)
        .add_attribute("method", "deposit")
        .add_attribute("message_id", message_id)
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("dest_chain_id", dest_chain_id.to_string()))
}

/// Execute handler for releasing escrowed tokens. The transaction sender is
/// the relayer identity checked against the trust registry.
pub fn execute_release(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    message_id: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    verification::assert_relayer(deps.storage, &info.sender, &config.admin)?;

    // Replay check fails before any asset transfer is attempted
    verification::mark_processed(deps.storage, &message_id)?;

    verification::assert_and_consume_rate(deps.storage, &env, amount)?;

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    // Floored at zero: extra token balance sent directly to the contract is
    // not tracked as escrow
    let locked = LOCKED_TOTAL.load(deps.storage)?;
    LOCKED_TOTAL.save(deps.storage, &locked.saturating_sub(amount))?;

    let payout: CosmosMsg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient_addr.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into();

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("method", "release")
        .add_attribute("message_id", message_id)
        .add_attribute("relayer", info.sender)
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount.to_string()))
}
