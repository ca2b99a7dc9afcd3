use crate::contract::REQUEST_RANDOMNESS_REPLY_ID;
use crate::error::ContractError;
use crate::state::{Config, CONFIG, NUM_WORDS, RAFFLE_INFO};
use cosmwasm_std::{
    wasm_execute, Addr, DepsMut, Event, Response, StdError, StdResult, SubMsg, SubMsgResult,
};
use randomness::{CoordinatorExecuteMsg, REQUEST_ID_ATTRIBUTE};

/// Builds the randomness request sent to the VRF coordinator when a drawing starts.
/// The coordinator assigns the request id, so the message is dispatched as a submessage
/// and the id is picked up in `record_randomness_request` once the call succeeded.
pub fn get_randomness_request(config: &Config) -> StdResult<SubMsg> {
    let request = wasm_execute(
        config.vrf_coordinator.to_string(),
        &CoordinatorExecuteMsg::RequestRandomWords {
            key_hash: config.key_hash.clone(),
            subscription_id: config.subscription_id,
            request_confirmations: config.request_confirmations,
            callback_gas_limit: config.callback_gas_limit,
            num_words: NUM_WORDS,
        },
        vec![],
    )?;
    Ok(SubMsg::reply_on_success(
        request,
        REQUEST_RANDOMNESS_REPLY_ID,
    ))
}

/// Called after the coordinator accepted the randomness request.
/// The request id found in the coordinator events becomes the only id
/// the raffle will accept a `FulfillRandomWords` callback for.
pub fn record_randomness_request(
    deps: DepsMut,
    msg: SubMsgResult,
) -> Result<Response, ContractError> {
    let subcall = msg.into_result().map_err(StdError::generic_err)?;
    let config = CONFIG.load(deps.storage)?;
    let request_id = request_id_from_events(&subcall.events, &config.vrf_coordinator)?;

    let mut raffle_info = RAFFLE_INFO.load(deps.storage)?;
    raffle_info.pending_request = Some(request_id);
    RAFFLE_INFO.save(deps.storage, &raffle_info)?;

    deps.api.debug(&format!(
        "raffle round {} waiting for randomness request {}",
        raffle_info.round, request_id
    ));

    Ok(Response::new()
        .add_attribute("action", "record_randomness_request")
        .add_attribute("round", raffle_info.round.to_string())
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("requested_raffle_winner")
                .add_attribute("request_id", request_id.to_string()),
        ))
}

/// Reads the request id from the `wasm` event emitted by `coordinator`.
/// Events of other contracts touched by the same call are skipped.
pub fn request_id_from_events(
    events: &[Event],
    coordinator: &Addr,
) -> Result<u64, ContractError> {
    events
        .iter()
        .filter(|e| e.ty == "wasm")
        .filter(|e| {
            e.attributes
                .iter()
                .any(|attr| attr.key == "_contract_address" && attr.value == coordinator.as_str())
        })
        .flat_map(|e| e.attributes.iter())
        .find(|attr| attr.key == REQUEST_ID_ATTRIBUTE)
        .ok_or(ContractError::MissingRequestId {})?
        .value
        .parse::<u64>()
        .map_err(|_| ContractError::MissingRequestId {})
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator() -> Addr {
        Addr::unchecked("coordinator")
    }

    #[test]
    fn request_id_is_read_from_the_coordinator_event() {
        let events = vec![
            Event::new("execute").add_attribute("_contract_address", "coordinator"),
            Event::new("wasm")
                .add_attribute("_contract_address", "coordinator")
                .add_attribute("action", "request_random_words")
                .add_attribute("request_id", "12"),
        ];
        assert_eq!(request_id_from_events(&events, &coordinator()).unwrap(), 12);
    }

    #[test]
    fn request_id_of_another_contract_is_ignored() {
        let events = vec![
            Event::new("wasm")
                .add_attribute("_contract_address", "relay")
                .add_attribute("request_id", "99"),
            Event::new("wasm")
                .add_attribute("_contract_address", "coordinator")
                .add_attribute("request_id", "4"),
        ];
        assert_eq!(request_id_from_events(&events, &coordinator()).unwrap(), 4);

        let foreign_only = vec![Event::new("wasm")
            .add_attribute("_contract_address", "relay")
            .add_attribute("request_id", "99")];
        assert_eq!(
            request_id_from_events(&foreign_only, &coordinator()).unwrap_err(),
            ContractError::MissingRequestId {}
        );
    }

    #[test]
    fn missing_or_garbled_request_id() {
        let no_id = vec![Event::new("wasm")
            .add_attribute("_contract_address", "coordinator")
            .add_attribute("action", "request_random_words")];
        assert_eq!(
            request_id_from_events(&no_id, &coordinator()).unwrap_err(),
            ContractError::MissingRequestId {}
        );

        // only the wasm event counts
        let wrong_event = vec![Event::new("other")
            .add_attribute("_contract_address", "coordinator")
            .add_attribute("request_id", "3")];
        assert_eq!(
            request_id_from_events(&wrong_event, &coordinator()).unwrap_err(),
            ContractError::MissingRequestId {}
        );

        let garbled = vec![Event::new("wasm")
            .add_attribute("_contract_address", "coordinator")
            .add_attribute("request_id", "three")];
        assert_eq!(
            request_id_from_events(&garbled, &coordinator()).unwrap_err(),
            ContractError::MissingRequestId {}
        );
    }
}
