use crate::{
    contract::PAYOUT_REPLY_ID,
    error::ContractError,
    msg::UpkeepDiagnostic,
    state::{Config, RaffleInfo},
};
use cosmwasm_std::{Addr, BankMsg, Coin, Deps, Env, StdResult, SubMsg, Uint256};

/// Balance of the contract in the entrance fee denom. This is the prize pool.
pub fn contract_balance(deps: Deps, env: &Env, denom: &str) -> StdResult<Coin> {
    deps.querier.query_balance(&env.contract.address, denom)
}

/// Evaluates the drawing conditions against the current block
pub fn check_upkeep(
    deps: Deps,
    env: &Env,
    config: &Config,
    raffle_info: &RaffleInfo,
) -> StdResult<UpkeepDiagnostic> {
    let balance = contract_balance(deps, env, &config.entrance_fee.denom)?.amount;
    Ok(UpkeepDiagnostic {
        is_open: raffle_info.is_open(),
        time_passed: raffle_info.interval_elapsed(env, config.interval),
        has_players: raffle_info.number_of_players > 0,
        has_balance: !balance.is_zero(),
        balance,
        number_of_players: raffle_info.number_of_players,
        raffle_state: raffle_info.raffle_state,
    })
}

/// Maps a random word onto a player index, `random_word mod number_of_players`
pub fn pick_winner_index(random_word: Uint256, number_of_players: u32) -> Result<u32, ContractError> {
    if number_of_players == 0 {
        return Err(ContractError::NoPlayers {});
    }
    // the remainder is below number_of_players, it fits in the 4 low bytes
    let [.., b0, b1, b2, b3] = (random_word % Uint256::from(number_of_players)).to_be_bytes();
    Ok(u32::from_be_bytes([b0, b1, b2, b3]))
}

/// The prize transfer. A failure comes back through the reply and reverts the whole drawing.
pub fn get_payout_message(winner: &Addr, prize: Coin) -> SubMsg {
    SubMsg::reply_on_error(
        BankMsg::Send {
            to_address: winner.to_string(),
            amount: vec![prize],
        },
        PAYOUT_REPLY_ID,
    )
}
