use cosmwasm_std::{Addr, Binary, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use crate::{
    error::ContractError,
    msg::{CheckUpkeepResponse, ConfigResponse},
    state::{RoundResult, CONFIG, NUM_WORDS, PLAYERS, RAFFLE_INFO, ROUND_RESULTS},
    utils::check_upkeep,
};

// settings for pagination
const MAX_LIMIT: u32 = 100;
const DEFAULT_LIMIT: u32 = 10;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        entrance_fee: config.entrance_fee,
        interval: config.interval,
        vrf_coordinator: config.vrf_coordinator,
        key_hash: config.key_hash,
        subscription_id: config.subscription_id,
        callback_gas_limit: config.callback_gas_limit,
        request_confirmations: config.request_confirmations,
        num_words: NUM_WORDS,
    })
}

/// Tells keepers whether `PerformUpkeep` would go through at the current block
pub fn query_check_upkeep(deps: Deps, env: Env) -> StdResult<CheckUpkeepResponse> {
    let config = CONFIG.load(deps.storage)?;
    let raffle_info = RAFFLE_INFO.load(deps.storage)?;
    let diagnostic = check_upkeep(deps, &env, &config, &raffle_info)?;

    Ok(CheckUpkeepResponse {
        upkeep_needed: diagnostic.upkeep_needed(),
        perform_data: Binary::default(),
        diagnostic,
    })
}

/// Player at `index` in the current round
pub fn query_player(deps: Deps, index: u32) -> Result<Addr, ContractError> {
    let raffle_info = RAFFLE_INFO.load(deps.storage)?;
    if index >= raffle_info.number_of_players {
        return Err(ContractError::IndexOutOfRange {
            index,
            number_of_players: raffle_info.number_of_players,
        });
    }
    Ok(PLAYERS.load(deps.storage, (raffle_info.round, index))?)
}

/// Query all players of a round, in entry order
pub fn query_all_players(
    deps: Deps,
    round: Option<u64>,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<String>> {
    let round = match round {
        Some(round) => round,
        None => RAFFLE_INFO.load(deps.storage)?.round,
    };
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    PLAYERS
        .prefix(round)
        .range(deps.storage, start, None, Order::Ascending)
        .map(|kv_item| Ok(kv_item?.1.to_string()))
        .take(limit)
        .collect()
}

pub fn query_round_result(deps: Deps, round: u64) -> StdResult<RoundResult> {
    ROUND_RESULTS.load(deps.storage, round)
}
