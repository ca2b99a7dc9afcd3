//! Bank module that refuses transfers to one address.
//! Stands in for a recipient that cannot receive funds, so a prize transfer fails on chain.
use anyhow::{bail, Result as AnyResult};
use cosmwasm_schema::{schemars::JsonSchema, serde::de::DeserializeOwned};
use cosmwasm_std::{
    Addr, Api, BankMsg, BankQuery, Binary, BlockInfo, CustomQuery, Querier, Storage,
};
use cw_multi_test::{
    App, AppBuilder, AppResponse, Bank, BankKeeper, BankSudo, CosmosRouter, Module,
};
use std::fmt::Debug;

pub type BlockingBankApp = App<BlockingBank>;

pub struct BlockingBank {
    inner: BankKeeper,
    blocked: Addr,
}

impl BlockingBank {
    pub fn new(blocked: &Addr) -> Self {
        BlockingBank {
            inner: BankKeeper::new(),
            blocked: blocked.clone(),
        }
    }
}

impl Module for BlockingBank {
    type ExecT = BankMsg;
    type QueryT = BankQuery;
    type SudoT = BankSudo;

    fn execute<ExecC, QueryC>(
        &self,
        api: &dyn Api,
        storage: &mut dyn Storage,
        router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        block: &BlockInfo,
        sender: Addr,
        msg: BankMsg,
    ) -> AnyResult<AppResponse>
    where
        ExecC: Debug + Clone + PartialEq + JsonSchema + DeserializeOwned + 'static,
        QueryC: CustomQuery + DeserializeOwned + 'static,
    {
        if let BankMsg::Send { to_address, .. } = &msg {
            if to_address == self.blocked.as_str() {
                bail!("blocked recipient");
            }
        }
        self.inner.execute(api, storage, router, block, sender, msg)
    }

    fn query(
        &self,
        api: &dyn Api,
        storage: &dyn Storage,
        querier: &dyn Querier,
        block: &BlockInfo,
        request: BankQuery,
    ) -> AnyResult<Binary> {
        self.inner.query(api, storage, querier, block, request)
    }

    fn sudo<ExecC, QueryC>(
        &self,
        api: &dyn Api,
        storage: &mut dyn Storage,
        router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        block: &BlockInfo,
        msg: BankSudo,
    ) -> AnyResult<AppResponse>
    where
        ExecC: Debug + Clone + PartialEq + JsonSchema + DeserializeOwned + 'static,
        QueryC: CustomQuery + DeserializeOwned + 'static,
    {
        self.inner.sudo(api, storage, router, block, msg)
    }
}

impl Bank for BlockingBank {}

/// App whose bank rejects every `BankMsg::Send` to `blocked`
pub fn blocking_bank_app(blocked: &Addr) -> BlockingBankApp {
    AppBuilder::new()
        .with_bank(BlockingBank::new(blocked))
        .build(|_, _, _| {})
}
