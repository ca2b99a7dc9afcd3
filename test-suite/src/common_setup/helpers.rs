use anyhow::Error;
use cosmwasm_std::Timestamp;
use cw_multi_test::{App, AppResponse};

pub fn setup_block_time(router: &mut App, nanos: u64, height: Option<u64>) {
    let mut block = router.block_info();
    block.time = Timestamp::from_nanos(nanos);
    if let Some(h) = height {
        block.height = h;
    }
    router.set_block(block);
}

/// Moves the chain forward, one block per 5 seconds
pub fn plus_block_seconds(router: &mut App, seconds: u64) {
    router.update_block(|block| {
        block.time = block.time.plus_seconds(seconds);
        block.height += seconds.div_ceil(5).max(1);
    });
}

pub fn assert_error(res: Result<AppResponse, Error>, expected: String) {
    assert_eq!(res.unwrap_err().root_cause().to_string(), expected);
}
