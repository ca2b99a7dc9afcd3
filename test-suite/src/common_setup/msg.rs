use cosmwasm_std::Addr;

pub struct RaffleCodeIds {
    pub raffle_code_id: u64,
    pub coordinator_code_id: u64,
}

pub struct RaffleContracts {
    pub raffle: Addr,
    pub coordinator: Addr,
}
