//! Mock VRF coordinator.
//! Requests are recorded when the raffle asks for randomness and only answered
//! when a test fulfills them through `sudo`, the way an oracle answers a few blocks later.
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Response,
    StdError, StdResult, Uint256, WasmMsg,
};
use cw_storage_plus::{Item, Map};
use randomness::{
    random_word_from_bytes, ConsumerExecuteMsg, CoordinatorExecuteMsg, REQUEST_ID_ATTRIBUTE,
};

use super::constants::RANDOMNESS_SEED;

#[cw_serde]
pub struct RandomnessRequest {
    pub consumer: Addr,
    pub subscription_id: u64,
    pub num_words: u32,
}

const NEXT_REQUEST_ID: Item<u64> = Item::new("next_request_id");
const REQUESTS: Map<u64, RandomnessRequest> = Map::new("requests");

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum QueryMsg {
    Request { request_id: u64 },
}

#[cw_serde]
pub enum SudoMsg {
    /// Answers with words derived from `RANDOMNESS_SEED`, see `mock_random_word`
    FulfillRandomWords { request_id: u64 },
    /// Answers with the given words, so a test can decide who wins
    FulfillRandomWordsWithOverride {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, StdError> {
    Ok(Response::new())
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, StdError> {
    match msg {
        QueryMsg::Request { request_id } => {
            to_json_binary(&REQUESTS.may_load(deps.storage, request_id)?)
        }
    }
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: CoordinatorExecuteMsg,
) -> Result<Response, StdError> {
    match msg {
        CoordinatorExecuteMsg::RequestRandomWords {
            subscription_id,
            num_words,
            ..
        } => register_request(deps, info, subscription_id, num_words),
    }
}

pub fn sudo(deps: DepsMut, _env: Env, msg: SudoMsg) -> Result<Response, StdError> {
    match msg {
        SudoMsg::FulfillRandomWords { request_id } => {
            let request = take_request(deps, request_id)?;
            let random_words = (0..request.num_words)
                .map(|index| mock_random_word(request_id, index))
                .collect::<StdResult<Vec<_>>>()?;
            fulfill(request, request_id, random_words)
        }
        SudoMsg::FulfillRandomWordsWithOverride {
            request_id,
            random_words,
        } => {
            let request = take_request(deps, request_id)?;
            fulfill(request, request_id, random_words)
        }
    }
}

/// Word `index` of the answer to `request_id` when no override is given
pub fn mock_random_word(request_id: u64, index: u32) -> StdResult<Uint256> {
    let seed = random_word_from_bytes(HexBinary::from_hex(RANDOMNESS_SEED)?.to_array()?);
    Ok(seed.checked_add(Uint256::from(request_id * 100 + u64::from(index)))?)
}

fn register_request(
    deps: DepsMut,
    info: MessageInfo,
    subscription_id: u64,
    num_words: u32,
) -> StdResult<Response> {
    if num_words == 0 {
        return Err(StdError::generic_err("At least one random word must be requested"));
    }
    // ids start at 1, like the chainlink mock
    let request_id = NEXT_REQUEST_ID.may_load(deps.storage)?.unwrap_or(1);
    NEXT_REQUEST_ID.save(deps.storage, &(request_id + 1))?;
    REQUESTS.save(
        deps.storage,
        request_id,
        &RandomnessRequest {
            consumer: info.sender,
            subscription_id,
            num_words,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "request_random_words")
        .add_attribute(REQUEST_ID_ATTRIBUTE, request_id.to_string())
        .add_attribute("subscription_id", subscription_id.to_string()))
}

// a request is answered once
fn take_request(deps: DepsMut, request_id: u64) -> StdResult<RandomnessRequest> {
    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or_else(|| StdError::generic_err("nonexistent request"))?;
    REQUESTS.remove(deps.storage, request_id);
    Ok(request)
}

fn fulfill(
    request: RandomnessRequest,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> StdResult<Response> {
    Ok(Response::new()
        .add_message(WasmMsg::Execute {
            contract_addr: request.consumer.to_string(),
            msg: to_json_binary(&ConsumerExecuteMsg::FulfillRandomWords {
                request_id,
                random_words,
            })?,
            funds: vec![],
        })
        .add_attribute("action", "fulfill_random_words")
        .add_attribute(REQUEST_ID_ATTRIBUTE, request_id.to_string()))
}
