#[cfg(test)]
mod tests {
    use cosmwasm_std::Addr;
    use raffle_lottery::{msg::QueryMsg, state::RoundResult};

    use crate::{
        common_setup::{
            constants::{ENTRANCE_FEE, NATIVE_DENOM},
            setup_accounts_and_block::mint_native,
            setup_raffle::proper_raffle_instantiate,
        },
        raffle::setup::{execute_msg::enter_raffle, helpers::start_drawing},
    };

    #[test]
    fn all_players_is_paginated() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let players: Vec<Addr> = (0..25)
            .map(|i| Addr::unchecked(format!("player-{i:02}")))
            .collect();
        for player in &players {
            mint_native(&mut app, player, ENTRANCE_FEE);
            enter_raffle(&mut app, &contracts, player).unwrap();
        }

        let all_players = |start_after: Option<u32>, limit: Option<u32>| -> Vec<String> {
            app.wrap()
                .query_wasm_smart(
                    contracts.raffle.clone(),
                    &QueryMsg::AllPlayers {
                        round: None,
                        start_after,
                        limit,
                    },
                )
                .unwrap()
        };

        // default page
        let page = all_players(None, None);
        assert_eq!(page.len(), 10);
        assert_eq!(page[0], players[0].to_string());

        // start_after is exclusive
        let page = all_players(Some(9), Some(20));
        assert_eq!(page.len(), 15);
        assert_eq!(page[0], players[10].to_string());
        assert_eq!(page[14], players[24].to_string());

        assert!(all_players(Some(24), None).is_empty());
    }

    #[test]
    fn unknown_round_result() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let one = Addr::unchecked("addr-one");
        mint_native(&mut app, &one, ENTRANCE_FEE);

        // the round is still running
        start_drawing(&mut app, &contracts, &[&one]);
        let res: Result<RoundResult, _> = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RoundResult { round: 0 });
        assert!(res.is_err());

        let pending: Option<u64> = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::PendingRequest {})
            .unwrap();
        assert!(pending.is_some());
        assert_eq!(
            app.wrap()
                .query_balance(contracts.raffle.clone(), NATIVE_DENOM)
                .unwrap()
                .amount
                .u128(),
            ENTRANCE_FEE
        );
    }
}
