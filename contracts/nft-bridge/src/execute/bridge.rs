//! Deposit and Release handlers.
//!
//! The rate limiter meters NFT movements as one unit per transfer. The
//! allow-list check runs before any ownership transfer is attempted, and all
//! storage writes commit atomically with the CW721 transfer submessage.

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw721::Cw721ExecuteMsg;

use crate::error::ContractError;
use crate::state::{COLLECTIONS, CONFIG};

fn assert_collection_supported(
    deps: &DepsMut,
    collection: &Addr,
) -> Result<(), ContractError> {
    let supported = COLLECTIONS
        .may_load(deps.storage, collection)?
        .unwrap_or(false);
    if !supported {
        return Err(ContractError::CollectionNotSupported {
            collection: collection.to_string(),
        });
    }
    Ok(())
}

/// Execute handler for locking a token id into escrow.
#[allow(clippy::too_many_arguments)]
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collection: String,
    token_id: String,
    dest_chain_id: u64,
    recipient: String,
    message_id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    let collection_addr = deps.api.addr_validate(&collection)?;
    assert_collection_supported(&deps, &collection_addr)?;

    if dest_chain_id == 0 {
        return Err(ContractError::InvalidDestination {
            chain_id: dest_chain_id,
        });
    }

    // Each NFT movement consumes one unit of the window budget
    verification::assert_and_consume_rate(deps.storage, &env, Uint128::one())?;

    // Pull the token into escrow; requires the caller to own it or to have
    // approved this contract as spender. The collection contract enforces
    // that, and a rejection unwinds this whole call.
    let pull: CosmosMsg = WasmMsg::Execute {
        contract_addr: collection_addr.to_string(),
        msg: to_json_binary(&Cw721ExecuteMsg::TransferNft {
            recipient: env.contract.address.to_string(),
            token_id: token_id.clone(),
        })?,
        funds: vec![],
    }
    .into();

    Ok(Response::new()
        .add_message(pull)
        .add_attribute("method", "deposit")
        .add_attribute("message_id", message_id)
        .add_attribute("sender", info.sender)
        .add_attribute("collection", collection_addr)
        .add_attribute("token_id", token_id)
        .add_attribute("recipient", recipient)
        .add_attribute("dest_chain_id", dest_chain_id.to_string()))
}

/// Execute handler for releasing an escrowed token id. The transaction sender
/// is the relayer identity checked against the trust registry.
pub fn execute_release(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    message_id: String,
    collection: String,
    token_id: String,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    verification::assert_relayer(deps.storage, &info.sender, &config.admin)?;

    let collection_addr = deps.api.addr_validate(&collection)?;
    assert_collection_supported(&deps, &collection_addr)?;

    // Replay check fails before any asset transfer is attempted
    verification::mark_processed(deps.storage, &message_id)?;

    verification::assert_and_consume_rate(deps.storage, &env, Uint128::one())?;

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let payout: CosmosMsg = WasmMsg::Execute {
        contract_addr: collection_addr.to_string(),
        msg: to_json_binary(&Cw721ExecuteMsg::TransferNft {
            recipient: recipient_addr.to_string(),
            token_id: token_id.clone(),
        })?,
        funds: vec![],
    }
    .into();

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("method", "release")
        .add_attribute("message_id", message_id)
        .add_attribute("relayer", info.sender)
        .add_attribute("collection", collection_addr)
        .add_attribute("token_id", token_id)
        .add_attribute("recipient", recipient_addr))
}
