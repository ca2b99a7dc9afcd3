use cosmwasm_std::{
    coin, ensure, ensure_eq, Binary, DepsMut, Env, Event, MessageInfo, OverflowError,
    OverflowOperation, Response, StdError, SubMsgResult, Uint256,
};
use cw_utils::may_pay;

use crate::{
    error::ContractError,
    randomness::get_randomness_request,
    state::{RaffleState, RoundResult, CONFIG, PLAYERS, RAFFLE_INFO, ROUND_RESULTS},
    utils::{check_upkeep, contract_balance, get_payout_message, pick_winner_index},
};

/// Registers the sender as a player of the current round.
/// The entrance fee must be sent along with the message, in the configured denom.
/// Paying more than the fee is accepted, the surplus goes to the prize pool.
/// The same address can enter several times, each entry gets its own player index.
pub fn execute_enter_raffle(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut raffle_info = RAFFLE_INFO.load(deps.storage)?;

    ensure!(
        raffle_info.is_open(),
        ContractError::NotOpen {
            state: raffle_info.raffle_state
        }
    );

    let sent = may_pay(&info, &config.entrance_fee.denom)?;
    if sent < config.entrance_fee.amount {
        return Err(ContractError::InsufficientPayment {
            sent: coin(sent.u128(), &config.entrance_fee.denom),
            required: config.entrance_fee,
        });
    }

    let player_index = raffle_info.number_of_players;
    raffle_info.number_of_players = player_index.checked_add(1).ok_or_else(|| {
        StdError::overflow(OverflowError::new(OverflowOperation::Add, player_index, 1))
    })?;
    PLAYERS.save(
        deps.storage,
        (raffle_info.round, player_index),
        &info.sender,
    )?;
    RAFFLE_INFO.save(deps.storage, &raffle_info)?;

    Ok(Response::new()
        .add_attribute("action", "enter_raffle")
        .add_attribute("round", raffle_info.round.to_string())
        .add_attribute("player", info.sender.clone())
        .add_attribute("player_index", player_index.to_string())
        .add_attribute("timestamp", env.block.time.to_string())
        .add_event(Event::new("raffle_enter").add_attribute("player", info.sender)))
}

/// Starts the drawing of the current round.
/// Keepers are not trusted, the drawing conditions are checked again here
/// and the call fails with the current diagnostic when one of them is not met.
pub fn execute_perform_upkeep(
    deps: DepsMut,
    env: Env,
    _perform_data: Option<Binary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut raffle_info = RAFFLE_INFO.load(deps.storage)?;

    let diagnostic = check_upkeep(deps.as_ref(), &env, &config, &raffle_info)?;
    if !diagnostic.upkeep_needed() {
        return Err(ContractError::UpkeepNotNeeded {
            balance: diagnostic.balance,
            number_of_players: diagnostic.number_of_players,
            raffle_state: diagnostic.raffle_state,
        });
    }

    // No entries are accepted until the randomness comes back
    raffle_info.raffle_state = RaffleState::Calculating;
    RAFFLE_INFO.save(deps.storage, &raffle_info)?;

    Ok(Response::new()
        .add_submessage(get_randomness_request(&config)?)
        .add_attribute("action", "perform_upkeep")
        .add_attribute("round", raffle_info.round.to_string())
        .add_attribute("number_of_players", raffle_info.number_of_players.to_string())
        .add_attribute("balance", diagnostic.balance)
        .add_attribute("timestamp", env.block.time.to_string()))
}

/// Receives the randomness for the pending request, picks and pays the winner, and opens the next round.
/// Only the first random word is used.
pub fn execute_fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut raffle_info = RAFFLE_INFO.load(deps.storage)?;

    // only the coordinator can deliver randomness
    // otherwise anyone could pick the winner by sending a chosen word directly to this contract
    ensure_eq!(
        info.sender,
        config.vrf_coordinator,
        ContractError::UnauthorizedFulfillment
    );
    // the pending request is cleared once fulfilled, a second callback lands here as well
    if raffle_info.pending_request != Some(request_id) {
        return Err(ContractError::UnknownRequest { request_id });
    }
    let random_word = *random_words
        .first()
        .ok_or(ContractError::NoRandomWords {})?;

    let round = raffle_info.round;
    let winner_index = pick_winner_index(random_word, raffle_info.number_of_players)?;
    let winner = PLAYERS.load(deps.storage, (round, winner_index))?;
    let prize = contract_balance(deps.as_ref(), &env, &config.entrance_fee.denom)?;

    ROUND_RESULTS.save(
        deps.storage,
        round,
        &RoundResult {
            round,
            winner: winner.clone(),
            prize: prize.clone(),
            request_id,
            random_word,
            completed_at: env.block.time,
        },
    )?;

    raffle_info.start_next_round(&env, winner.clone());
    RAFFLE_INFO.save(deps.storage, &raffle_info)?;

    Ok(Response::new()
        .add_submessage(get_payout_message(&winner, prize.clone()))
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("round", round.to_string())
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("winner_index", winner_index.to_string())
        .add_attribute("timestamp", env.block.time.to_string())
        .add_event(
            Event::new("winner_picked")
                .add_attribute("winner", winner)
                .add_attribute("prize", prize.to_string())
                .add_attribute("round", round.to_string()),
        ))
}

/// Reply of the prize transfer, only reached when the transfer failed.
/// Returning an error here reverts the drawing together with the transfer.
pub fn payout_reply(msg: SubMsgResult) -> Result<Response, ContractError> {
    match msg {
        SubMsgResult::Err(reason) => Err(ContractError::PayoutFailed { reason }),
        SubMsgResult::Ok(_) => Ok(Response::new().add_attribute("action", "payout")),
    }
}
