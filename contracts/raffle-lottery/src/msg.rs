use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin, HexBinary, Timestamp, Uint128, Uint256};

use crate::state::{RaffleState, RoundResult};

#[cw_serde]
pub struct InstantiateMsg {
    pub entrance_fee: Coin,
    pub interval: u64,
    pub vrf_coordinator: String,
    pub key_hash: HexBinary,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub request_confirmations: Option<u16>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pay the entrance fee to take part in the current round
    EnterRaffle {},
    /// Starts the drawing. Anyone can call it, it only goes through when `CheckUpkeep` says so
    PerformUpkeep { perform_data: Option<Binary> },
    /// Coordinator callback, same shape as `randomness::ConsumerExecuteMsg`
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(CheckUpkeepResponse)]
    CheckUpkeep {},
    #[returns(RaffleState)]
    RaffleState {},
    #[returns(Coin)]
    EntranceFee {},
    #[returns(Addr)]
    Player { index: u32 },
    /// Players of `round`, the current one by default
    #[returns(Vec<String>)]
    AllPlayers {
        round: Option<u64>,
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(Option<Addr>)]
    RecentWinner {},
    #[returns(Timestamp)]
    LastTimeStamp {},
    #[returns(u64)]
    Interval {},
    #[returns(u32)]
    NumberOfPlayers {},
    #[returns(u32)]
    NumWords {},
    #[returns(u16)]
    RequestConfirmations {},
    #[returns(Option<u64>)]
    PendingRequest {},
    #[returns(RoundResult)]
    RoundResult { round: u64 },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub entrance_fee: Coin,
    pub interval: u64,
    pub vrf_coordinator: Addr,
    pub key_hash: HexBinary,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub request_confirmations: u16,
    pub num_words: u32,
}

/// The four conditions of a drawing, as seen at query time
#[cw_serde]
pub struct UpkeepDiagnostic {
    pub is_open: bool,
    pub time_passed: bool,
    pub has_players: bool,
    pub has_balance: bool,
    pub balance: Uint128,
    pub number_of_players: u32,
    pub raffle_state: RaffleState,
}

impl UpkeepDiagnostic {
    pub fn upkeep_needed(&self) -> bool {
        self.is_open && self.time_passed && self.has_players && self.has_balance
    }
}

#[cw_serde]
pub struct CheckUpkeepResponse {
    pub upkeep_needed: bool,
    pub perform_data: Binary,
    pub diagnostic: UpkeepDiagnostic,
}
