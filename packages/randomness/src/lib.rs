use cosmwasm_schema::cw_serde;
use cosmwasm_std::{HexBinary, Uint256};

/// Key of the `wasm` event attribute a coordinator uses to report
/// the id it assigned to a `RequestRandomWords` call.
pub const REQUEST_ID_ATTRIBUTE: &str = "request_id";

/// Messages a VRF coordinator accepts from consumer contracts.
#[cw_serde]
pub enum CoordinatorExecuteMsg {
    RequestRandomWords {
        key_hash: HexBinary,
        subscription_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },
}

/// Callback a coordinator sends back to the consumer once the randomness is available.
/// Consumers must accept a variant with exactly this shape in their own `ExecuteMsg`.
#[cw_serde]
pub enum ConsumerExecuteMsg {
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

/// Interprets 32 bytes of randomness as a big endian 256 bit word.
pub fn random_word_from_bytes(bytes: [u8; 32]) -> Uint256 {
    Uint256::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::to_json_string;

    #[test]
    fn fulfill_callback_wire_format() {
        let msg = ConsumerExecuteMsg::FulfillRandomWords {
            request_id: 7,
            random_words: vec![Uint256::from(42u32)],
        };
        assert_eq!(
            to_json_string(&msg).unwrap(),
            r#"{"fulfill_random_words":{"request_id":7,"random_words":["42"]}}"#
        );
    }

    #[test]
    fn words_are_big_endian() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        bytes[30] = 2;
        assert_eq!(random_word_from_bytes(bytes), Uint256::from(513u32));
    }
}
