#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, Addr, HexBinary, Timestamp};
    use cw_multi_test::Executor;
    use raffle_lottery::{
        error::ContractError,
        msg::{ConfigResponse, MigrateMsg, QueryMsg},
        state::RaffleState,
    };

    use crate::{
        common_setup::{
            constants::{
                CALLBACK_GAS_LIMIT, ENTRANCE_FEE, GENESIS_TIME_NANOS, INTERVAL, KEY_HASH,
                NATIVE_DENOM, OWNER_ADDR, SUBSCRIPTION_ID,
            },
            contract_boxes::{contract_raffle_lottery, custom_mock_app},
            helpers::setup_block_time,
            setup_raffle::proper_raffle_instantiate,
        },
        raffle::setup::{
            execute_msg::instantiate_raffle_contract,
            helpers::{last_timestamp, number_of_players, raffle_state, recent_winner},
            test_msgs::InstantiateRaffleParams,
        },
    };

    #[test]
    fn test_i() {
        let mut app = custom_mock_app();
        let params = InstantiateRaffleParams {
            app: &mut app,
            admin_account: Addr::unchecked(OWNER_ADDR),
            entrance_fee: coin(ENTRANCE_FEE, NATIVE_DENOM),
            interval: INTERVAL,
            vrf_coordinator: "coordinator".to_string(),
            request_confirmations: Some(6),
        };
        let instantiate = instantiate_raffle_contract(params);
        assert!(
            instantiate.is_ok(),
            "There is an issue instantiating a raffle"
        );

        let confirmations: u16 = app
            .wrap()
            .query_wasm_smart(instantiate.unwrap(), &QueryMsg::RequestConfirmations {})
            .unwrap();
        assert_eq!(confirmations, 6);
    }

    #[test]
    fn initializes_the_raffle_correctly() {
        let (app, contracts) = proper_raffle_instantiate();

        assert_eq!(raffle_state(&app, &contracts), RaffleState::Open);
        assert_eq!(number_of_players(&app, &contracts), 0);
        assert_eq!(recent_winner(&app, &contracts), None);
        assert_eq!(
            last_timestamp(&app, &contracts),
            Timestamp::from_nanos(GENESIS_TIME_NANOS)
        );

        let interval: u64 = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Interval {})
            .unwrap();
        assert_eq!(interval, INTERVAL);

        let fee: cosmwasm_std::Coin = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::EntranceFee {})
            .unwrap();
        assert_eq!(fee, coin(ENTRANCE_FEE, NATIVE_DENOM));

        let num_words: u32 = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::NumWords {})
            .unwrap();
        assert_eq!(num_words, 1);

        let config: ConfigResponse = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Config {})
            .unwrap();
        assert_eq!(
            config,
            ConfigResponse {
                entrance_fee: coin(ENTRANCE_FEE, NATIVE_DENOM),
                interval: INTERVAL,
                vrf_coordinator: contracts.coordinator.clone(),
                key_hash: HexBinary::from_hex(KEY_HASH).unwrap(),
                subscription_id: SUBSCRIPTION_ID,
                callback_gas_limit: CALLBACK_GAS_LIMIT,
                request_confirmations: 3,
                num_words: 1,
            }
        );
    }

    #[test]
    fn raffle_state_serializes_lowercase() {
        let (app, contracts) = proper_raffle_instantiate();
        let state: String = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RaffleState {})
            .unwrap();
        assert_eq!(state, "open");
    }

    #[test]
    fn migrates_to_a_new_code_id() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let new_code_id = app.store_code(contract_raffle_lottery());
        let res = app.migrate_contract(
            Addr::unchecked(OWNER_ADDR),
            contracts.raffle.clone(),
            &MigrateMsg {},
            new_code_id,
        );
        assert!(res.is_ok(), "There is an issue migrating the raffle");
        assert_eq!(raffle_state(&app, &contracts), RaffleState::Open);
    }

    mod bad {
        use super::*;

        fn instantiate_with(
            entrance_fee: cosmwasm_std::Coin,
            interval: u64,
            vrf_coordinator: &str,
        ) -> anyhow::Error {
            let mut app = custom_mock_app();
            setup_block_time(&mut app, GENESIS_TIME_NANOS, None);
            let params = InstantiateRaffleParams {
                app: &mut app,
                admin_account: Addr::unchecked(OWNER_ADDR),
                entrance_fee,
                interval,
                vrf_coordinator: vrf_coordinator.to_string(),
                request_confirmations: None,
            };
            instantiate_raffle_contract(params).unwrap_err()
        }

        #[test]
        fn test_i_zero_entrance_fee() {
            let err = instantiate_with(coin(0, NATIVE_DENOM), INTERVAL, "coordinator");
            assert_eq!(
                err.root_cause().to_string(),
                ContractError::InvalidEntranceFee {}.to_string()
            );
        }

        #[test]
        fn test_i_zero_interval() {
            let err = instantiate_with(coin(ENTRANCE_FEE, NATIVE_DENOM), 0, "coordinator");
            assert_eq!(
                err.root_cause().to_string(),
                ContractError::InvalidInterval {}.to_string()
            );
        }

        #[test]
        fn test_i_bad_coordinator_addr() {
            let err = instantiate_with(coin(ENTRANCE_FEE, NATIVE_DENOM), INTERVAL, "CO");
            assert_eq!(
                err.root_cause().to_string(),
                ContractError::InvalidCoordinatorAddress.to_string()
            );
        }
    }
}
