use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Env, HexBinary, Timestamp, Uint256};
use cw_storage_plus::{Item, Map};

pub const DEFAULT_REQUEST_CONFIRMATIONS: u16 = 3;
// Only the first word is ever used to pick the winner.
pub const NUM_WORDS: u32 = 1;

#[cw_serde]
pub struct Config {
    pub entrance_fee: Coin,
    /// Minimum number of seconds between two drawings
    pub interval: u64,
    pub vrf_coordinator: Addr,
    pub key_hash: HexBinary,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub request_confirmations: u16,
}

pub const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
#[derive(Copy)]
pub enum RaffleState {
    Open,
    Calculating,
}

impl std::fmt::Display for RaffleState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RaffleState::Open => write!(f, "open"),
            RaffleState::Calculating => write!(f, "calculating"),
        }
    }
}

/// Everything that changes from one round to the next.
#[cw_serde]
pub struct RaffleInfo {
    /// Players of a round are stored under this prefix.
    /// Starting a new round is how the player list gets cleared.
    pub round: u64,
    pub raffle_state: RaffleState,
    pub number_of_players: u32,
    /// Instantiation time, then the time the last drawing completed
    pub last_timestamp: Timestamp,
    pub recent_winner: Option<Addr>,
    /// Request id assigned by the coordinator while a drawing is in flight
    pub pending_request: Option<u64>,
}

impl RaffleInfo {
    pub fn new(env: &Env) -> Self {
        RaffleInfo {
            round: 0,
            raffle_state: RaffleState::Open,
            number_of_players: 0,
            last_timestamp: env.block.time,
            recent_winner: None,
            pending_request: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.raffle_state == RaffleState::Open
    }

    pub fn interval_elapsed(&self, env: &Env, interval: u64) -> bool {
        env.block
            .time
            .seconds()
            .saturating_sub(self.last_timestamp.seconds())
            >= interval
    }

    /// Closes the current round and opens an empty one.
    pub fn start_next_round(&mut self, env: &Env, winner: Addr) {
        self.recent_winner = Some(winner);
        self.round += 1;
        self.number_of_players = 0;
        self.raffle_state = RaffleState::Open;
        self.last_timestamp = env.block.time;
        self.pending_request = None;
    }
}

pub const RAFFLE_INFO: Item<RaffleInfo> = Item::new("raffle_info");

/// (round, player index) -> player
pub const PLAYERS: Map<(u64, u32), Addr> = Map::new("players");

#[cw_serde]
pub struct RoundResult {
    pub round: u64,
    pub winner: Addr,
    pub prize: Coin,
    pub request_id: u64,
    pub random_word: Uint256,
    pub completed_at: Timestamp,
}

pub const ROUND_RESULTS: Map<u64, RoundResult> = Map::new("round_results");
