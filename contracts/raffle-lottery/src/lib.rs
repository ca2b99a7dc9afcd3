#![allow(clippy::result_large_err)]

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod randomness;
pub mod state;
pub mod utils;
