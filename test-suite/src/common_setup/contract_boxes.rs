use cosmwasm_std::Empty;
use cw_multi_test::{App, Contract, ContractWrapper};

pub fn custom_mock_app() -> App {
    App::default()
}

pub fn contract_raffle_lottery() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        raffle_lottery::contract::execute,
        raffle_lottery::contract::instantiate,
        raffle_lottery::contract::query,
    )
    .with_reply(raffle_lottery::contract::reply)
    .with_migrate(raffle_lottery::contract::migrate);
    Box::new(contract)
}

pub fn contract_vrf_coordinator() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        super::vrf_coordinator::execute,
        super::vrf_coordinator::instantiate,
        super::vrf_coordinator::query,
    )
    .with_sudo(super::vrf_coordinator::sudo);
    Box::new(contract)
}
