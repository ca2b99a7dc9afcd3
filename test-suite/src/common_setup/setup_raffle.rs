use cosmwasm_std::{coin, Addr, HexBinary};
use cw_multi_test::{App, Executor};
use raffle_lottery::msg::InstantiateMsg;

use super::{
    constants::{
        CALLBACK_GAS_LIMIT, ENTRANCE_FEE, GENESIS_TIME_NANOS, INTERVAL, KEY_HASH, NATIVE_DENOM,
        OWNER_ADDR, SUBSCRIPTION_ID,
    },
    contract_boxes::{contract_raffle_lottery, contract_vrf_coordinator, custom_mock_app},
    helpers::setup_block_time,
    msg::{RaffleCodeIds, RaffleContracts},
    vrf_coordinator,
};

pub fn raffle_code_ids(router: &mut App) -> RaffleCodeIds {
    let raffle_code_id = router.store_code(contract_raffle_lottery());
    println!("raffle_code_id: {raffle_code_id}");

    let coordinator_code_id = router.store_code(contract_vrf_coordinator());
    println!("coordinator_code_id: {coordinator_code_id}");

    RaffleCodeIds {
        raffle_code_id,
        coordinator_code_id,
    }
}

/// The instantiate message every test starts from
pub fn raffle_instantiate_msg(coordinator: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        entrance_fee: coin(ENTRANCE_FEE, NATIVE_DENOM),
        interval: INTERVAL,
        vrf_coordinator: coordinator.to_string(),
        key_hash: HexBinary::from_hex(KEY_HASH).unwrap(),
        subscription_id: SUBSCRIPTION_ID,
        callback_gas_limit: CALLBACK_GAS_LIMIT,
        request_confirmations: None,
    }
}

pub fn setup_coordinator(app: &mut App, code_ids: &RaffleCodeIds) -> Addr {
    app.instantiate_contract(
        code_ids.coordinator_code_id,
        Addr::unchecked(OWNER_ADDR),
        &vrf_coordinator::InstantiateMsg {},
        &[],
        "vrf-coordinator",
        None,
    )
    .unwrap()
}

pub fn proper_raffle_instantiate() -> (App, RaffleContracts) {
    let mut app = custom_mock_app();
    setup_block_time(&mut app, GENESIS_TIME_NANOS, Some(10000));

    let code_ids = raffle_code_ids(&mut app);
    let coordinator = setup_coordinator(&mut app, &code_ids);

    let raffle = app
        .instantiate_contract(
            code_ids.raffle_code_id,
            Addr::unchecked(OWNER_ADDR),
            &raffle_instantiate_msg(&coordinator),
            &[],
            "raffle-lottery",
            Some(OWNER_ADDR.to_string()),
        )
        .unwrap();

    println!("coordinator_addr: {coordinator}");
    println!("raffle_contract_addr: {raffle}");

    (app, RaffleContracts { raffle, coordinator })
}
