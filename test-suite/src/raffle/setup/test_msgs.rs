use cosmwasm_std::{Addr, Coin};
use cw_multi_test::App;

pub struct InstantiateRaffleParams<'a> {
    pub app: &'a mut App,
    pub admin_account: Addr,
    pub entrance_fee: Coin,
    pub interval: u64,
    pub vrf_coordinator: String,
    pub request_confirmations: Option<u16>,
}

pub struct EnterRaffleParams<'a> {
    pub app: &'a mut App,
    pub raffle_contract_addr: Addr,
    pub msg_senders: Vec<Addr>,
    pub funds_send: Vec<Coin>,
}
