use thiserror::Error;

use cosmwasm_std::{Coin, StdError, Uint128};
use cw_utils::PaymentError;

use crate::state::RaffleState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Coordinator address is not valid")]
    InvalidCoordinatorAddress,

    #[error("The entrance fee must be a non-zero amount")]
    InvalidEntranceFee {},

    #[error("The raffle interval must be at least one second")]
    InvalidInterval {},

    #[error("Raffle is not open. Current state : {state}")]
    NotOpen { state: RaffleState },

    #[error("Not enough funds to enter the raffle. Required : {required}, sent : {sent}")]
    InsufficientPayment { required: Coin, sent: Coin },

    #[error(
        "Upkeep not needed. Balance : {balance}, players : {number_of_players}, state : {raffle_state}"
    )]
    UpkeepNotNeeded {
        balance: Uint128,
        number_of_players: u32,
        raffle_state: RaffleState,
    },

    // the callback carries the prize decision, only the coordinator may send it
    #[error("Unauthorized randomness fulfillment")]
    UnauthorizedFulfillment,

    #[error("nonexistent request : {request_id}")]
    UnknownRequest { request_id: u64 },

    #[error("The coordinator did not deliver any random word")]
    NoRandomWords {},

    #[error("There are no players in the current round")]
    NoPlayers {},

    #[error("transfer failed : {reason}")]
    PayoutFailed { reason: String },

    #[error("Player index {index} is out of range, the round has {number_of_players} players")]
    IndexOutOfRange { index: u32, number_of_players: u32 },

    #[error("The coordinator response does not contain a request id")]
    MissingRequestId {},

    #[error("Unknown reply id : {0}")]
    UnknownReplyId(u64),

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },
}
