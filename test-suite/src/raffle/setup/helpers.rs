use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_multi_test::{App, AppResponse};
use raffle_lottery::{
    msg::{CheckUpkeepResponse, QueryMsg},
    state::RaffleState,
};

use crate::common_setup::{
    constants::{INTERVAL, NATIVE_DENOM},
    helpers::plus_block_seconds,
    msg::RaffleContracts,
    vrf_coordinator::{QueryMsg as CoordinatorQueryMsg, RandomnessRequest},
};

use super::execute_msg::{enter_raffle, perform_upkeep};

pub fn raffle_state(app: &App, contracts: &RaffleContracts) -> RaffleState {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RaffleState {})
        .unwrap()
}

pub fn number_of_players(app: &App, contracts: &RaffleContracts) -> u32 {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::NumberOfPlayers {})
        .unwrap()
}

pub fn check_upkeep(app: &App, contracts: &RaffleContracts) -> CheckUpkeepResponse {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::CheckUpkeep {})
        .unwrap()
}

pub fn pending_request(app: &App, contracts: &RaffleContracts) -> Option<u64> {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::PendingRequest {})
        .unwrap()
}

pub fn recent_winner(app: &App, contracts: &RaffleContracts) -> Option<Addr> {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RecentWinner {})
        .unwrap()
}

pub fn last_timestamp(app: &App, contracts: &RaffleContracts) -> Timestamp {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::LastTimeStamp {})
        .unwrap()
}

pub fn coordinator_request(
    app: &App,
    contracts: &RaffleContracts,
    request_id: u64,
) -> Option<RandomnessRequest> {
    app.wrap()
        .query_wasm_smart(
            contracts.coordinator.clone(),
            &CoordinatorQueryMsg::Request { request_id },
        )
        .unwrap()
}

pub fn native_balance(app: &App, addr: &Addr) -> Uint128 {
    app.wrap().query_balance(addr, NATIVE_DENOM).unwrap().amount
}

/// Value of `key` in the first event of type `ty`
pub fn event_attribute(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|event| event.ty == ty)
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
}

/// Request id announced by the raffle when the drawing started
pub fn requested_id(res: &AppResponse) -> u64 {
    event_attribute(res, "wasm-requested_raffle_winner", "request_id")
        .unwrap()
        .parse()
        .unwrap()
}

/// Every player enters once, the interval passes and the drawing starts.
/// Returns the randomness request id.
pub fn start_drawing(app: &mut App, contracts: &RaffleContracts, players: &[&Addr]) -> u64 {
    for player in players {
        enter_raffle(app, contracts, player).unwrap();
    }
    plus_block_seconds(app, INTERVAL + 1);
    let res = perform_upkeep(app, contracts).unwrap();
    requested_id(&res)
}
