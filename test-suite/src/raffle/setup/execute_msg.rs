use anyhow::Error as anyhow_error;
use cosmwasm_std::{coins, Addr, HexBinary, Uint256};
use cw_multi_test::{App, AppResponse, Executor};
use raffle_lottery::msg::{ExecuteMsg as RaffleExecuteMsg, InstantiateMsg};

use crate::common_setup::{
    constants::{
        CALLBACK_GAS_LIMIT, ENTRANCE_FEE, KEEPER_ADDR, KEY_HASH, NATIVE_DENOM, SUBSCRIPTION_ID,
    },
    contract_boxes::contract_raffle_lottery,
    msg::RaffleContracts,
    vrf_coordinator::SudoMsg as CoordinatorSudoMsg,
};

use super::test_msgs::{EnterRaffleParams, InstantiateRaffleParams};

pub fn instantiate_raffle_contract(
    params: InstantiateRaffleParams,
) -> Result<Addr, anyhow_error> {
    let code_id = params.app.store_code(contract_raffle_lottery());
    params.app.instantiate_contract(
        code_id,
        params.admin_account.clone(),
        &InstantiateMsg {
            entrance_fee: params.entrance_fee,
            interval: params.interval,
            vrf_coordinator: params.vrf_coordinator,
            key_hash: HexBinary::from_hex(KEY_HASH)?,
            subscription_id: SUBSCRIPTION_ID,
            callback_gas_limit: CALLBACK_GAS_LIMIT,
            request_confirmations: params.request_confirmations,
        },
        &[],
        "raffle-lottery",
        Some(params.admin_account.to_string()),
    )
}

/// Every sender enters once with the same funds. Stops at the first failing entry.
pub fn enter_raffle_template(params: EnterRaffleParams) -> Result<Vec<AppResponse>, anyhow_error> {
    params
        .msg_senders
        .iter()
        .map(|sender| {
            params.app.execute_contract(
                sender.clone(),
                params.raffle_contract_addr.clone(),
                &RaffleExecuteMsg::EnterRaffle {},
                &params.funds_send,
            )
        })
        .collect()
}

pub fn enter_raffle(
    app: &mut App,
    contracts: &RaffleContracts,
    player: &Addr,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        player.clone(),
        contracts.raffle.clone(),
        &RaffleExecuteMsg::EnterRaffle {},
        &coins(ENTRANCE_FEE, NATIVE_DENOM),
    )
}

pub fn perform_upkeep(
    app: &mut App,
    contracts: &RaffleContracts,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        Addr::unchecked(KEEPER_ADDR),
        contracts.raffle.clone(),
        &RaffleExecuteMsg::PerformUpkeep { perform_data: None },
        &[],
    )
}

/// The coordinator answers `request_id` with its seeded words
pub fn fulfill_request(
    app: &mut App,
    contracts: &RaffleContracts,
    request_id: u64,
) -> Result<AppResponse, anyhow_error> {
    app.wasm_sudo(
        contracts.coordinator.clone(),
        &CoordinatorSudoMsg::FulfillRandomWords { request_id },
    )
}

pub fn fulfill_request_with_words(
    app: &mut App,
    contracts: &RaffleContracts,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<AppResponse, anyhow_error> {
    app.wasm_sudo(
        contracts.coordinator.clone(),
        &CoordinatorSudoMsg::FulfillRandomWordsWithOverride {
            request_id,
            random_words,
        },
    )
}
