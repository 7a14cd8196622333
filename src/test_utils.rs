use ethereum_types::{H160, U256};

macro_rules! parameterize {
        ($test_fn:expr, [$(($name:ident, $input:expr)), * $(,)? ]) => {
            $(
                #[test]
                fn $name() {
                    $test_fn($input);
                }
            )*
        };
    }

pub fn address_from_string(address: &str) -> H160 {
    H160::from_slice(&hex::decode(address).unwrap())
}

pub fn uint_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    U256::from(value).to_big_endian(&mut word);
    word
}

pub fn address_word(address: &str) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(&hex::decode(address).unwrap());
    word
}

pub fn word_buffer(words: &[[u8; 32]]) -> Vec<u8> {
    words.iter().flat_map(|word| word.iter().copied()).collect()
}

pub(crate) use parameterize;
