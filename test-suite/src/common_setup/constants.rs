pub const OWNER_ADDR: &str = "owner";
pub const KEEPER_ADDR: &str = "keeper";
pub const NATIVE_DENOM: &str = "uatom";

// 0.01 of a 6 decimal denom
pub const ENTRANCE_FEE: u128 = 10_000;
pub const INTERVAL: u64 = 30;

pub const KEY_HASH: &str = "474e34a077df58807dbe9c96d3c009b23b3c6d0cce433e59bbf5b34f823bc56c";
pub const SUBSCRIPTION_ID: u64 = 1;
pub const CALLBACK_GAS_LIMIT: u32 = 500_000;

pub const GENESIS_TIME_NANOS: u64 = 1_647_032_400_000_000_000;

/// Seed of the words delivered by the mock coordinator
pub const RANDOMNESS_SEED: &str =
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa115";
