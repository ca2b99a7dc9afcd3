#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, to_json_binary, Deps, DepsMut, Env, MessageInfo, QueryResponse, Reply, Response,
};
use cw2::{get_contract_version, set_contract_version};

use crate::{
    error::ContractError,
    execute::{
        execute_enter_raffle, execute_fulfill_random_words, execute_perform_upkeep, payout_reply,
    },
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    query::{
        query_all_players, query_check_upkeep, query_config, query_player, query_round_result,
    },
    randomness::record_randomness_request,
    state::{
        Config, RaffleInfo, CONFIG, DEFAULT_REQUEST_CONFIRMATIONS, NUM_WORDS, RAFFLE_INFO,
    },
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REQUEST_RANDOMNESS_REPLY_ID: u64 = 1;
pub const PAYOUT_REPLY_ID: u64 = 2;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let vrf_coordinator = deps
        .api
        .addr_validate(&msg.vrf_coordinator)
        .map_err(|_| ContractError::InvalidCoordinatorAddress)?;

    ensure!(
        !msg.entrance_fee.amount.is_zero(),
        ContractError::InvalidEntranceFee {}
    );
    ensure!(msg.interval > 0, ContractError::InvalidInterval {});

    let config = Config {
        entrance_fee: msg.entrance_fee,
        interval: msg.interval,
        vrf_coordinator,
        key_hash: msg.key_hash,
        subscription_id: msg.subscription_id,
        callback_gas_limit: msg.callback_gas_limit,
        request_confirmations: msg
            .request_confirmations
            .unwrap_or(DEFAULT_REQUEST_CONFIRMATIONS),
    };
    CONFIG.save(deps.storage, &config)?;
    RAFFLE_INFO.save(deps.storage, &RaffleInfo::new(&env))?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "raffle_lottery")
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("interval", config.interval.to_string())
        .add_attribute("vrf_coordinator", config.vrf_coordinator))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    if previous.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: previous.contract,
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("previous_version", previous.version)
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::EnterRaffle {} => execute_enter_raffle(deps, env, info),
        ExecuteMsg::PerformUpkeep { perform_data } => {
            execute_perform_upkeep(deps, env, perform_data)
        }
        ExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        } => execute_fulfill_random_words(deps, env, info, request_id, random_words),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<QueryResponse, ContractError> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::CheckUpkeep {} => to_json_binary(&query_check_upkeep(deps, env)?)?,
        QueryMsg::RaffleState {} => {
            to_json_binary(&RAFFLE_INFO.load(deps.storage)?.raffle_state)?
        }
        QueryMsg::EntranceFee {} => to_json_binary(&CONFIG.load(deps.storage)?.entrance_fee)?,
        QueryMsg::Player { index } => to_json_binary(&query_player(deps, index)?)?,
        QueryMsg::AllPlayers {
            round,
            start_after,
            limit,
        } => to_json_binary(&query_all_players(deps, round, start_after, limit)?)?,
        QueryMsg::RecentWinner {} => {
            to_json_binary(&RAFFLE_INFO.load(deps.storage)?.recent_winner)?
        }
        QueryMsg::LastTimeStamp {} => {
            to_json_binary(&RAFFLE_INFO.load(deps.storage)?.last_timestamp)?
        }
        QueryMsg::Interval {} => to_json_binary(&CONFIG.load(deps.storage)?.interval)?,
        QueryMsg::NumberOfPlayers {} => {
            to_json_binary(&RAFFLE_INFO.load(deps.storage)?.number_of_players)?
        }
        QueryMsg::NumWords {} => to_json_binary(&NUM_WORDS)?,
        QueryMsg::RequestConfirmations {} => {
            to_json_binary(&CONFIG.load(deps.storage)?.request_confirmations)?
        }
        QueryMsg::PendingRequest {} => {
            to_json_binary(&RAFFLE_INFO.load(deps.storage)?.pending_request)?
        }
        QueryMsg::RoundResult { round } => to_json_binary(&query_round_result(deps, round)?)?,
    };
    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REQUEST_RANDOMNESS_REPLY_ID => record_randomness_request(deps, msg.result),
        PAYOUT_REPLY_ID => payout_reply(msg.result),
        id => Err(ContractError::UnknownReplyId(id)),
    }
}
