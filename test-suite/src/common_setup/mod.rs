pub mod blocking_bank;
pub mod constants;
pub mod contract_boxes;
pub mod helpers;
pub mod msg;
pub mod setup_accounts_and_block;
pub mod setup_raffle;
pub mod vrf_coordinator;
