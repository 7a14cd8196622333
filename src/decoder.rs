use crate::bitfield::low_bits;
use ethereum_types::{H160, U256};

/// Number of bytes in one static abi word.
pub const WORD_SIZE: usize = 32;

/// Describes how one 32 byte word of the result buffer is interpreted.
///
/// Only the static, fixed width types returned by the LendingPool are
/// supported; there is deliberately no notion of dynamic types here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// Unsigned integer of the declared bit width, right aligned in its word.
    UnsignedInt(usize),
    /// 20 byte address in the low bytes of its word.
    Address,
}

/// A value extracted from one word, mirroring [`TypeDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedValue {
    /// Unsigned integer value.
    Uint(U256),
    /// Address value.
    Address(H160),
}

impl DecodedValue {
    /// The integer value, if this word decoded as an unsigned integer.
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            DecodedValue::Uint(value) => Some(*value),
            DecodedValue::Address(_) => None,
        }
    }

    /// The address value, if this word decoded as an address.
    pub fn as_address(&self) -> Option<H160> {
        match self {
            DecodedValue::Address(address) => Some(*address),
            DecodedValue::Uint(_) => None,
        }
    }
}

/// Why a call result could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The upstream call failed; no result bytes exist to decode.
    #[error("call failed: {0}")]
    CallFailed(String),
    /// The result buffer length is zero or not a multiple of the word size.
    #[error("result length {0} is not a positive multiple of 32 bytes")]
    InvalidLength(usize),
    /// The result buffer holds fewer words than the layout requires.
    #[error("result has {actual} words, layout needs {expected}")]
    Truncated {
        /// Words the layout requires.
        expected: usize,
        /// Words the buffer actually holds.
        actual: usize,
    },
    /// A decoded value did not match the variant the layout declares.
    #[error("value at position {index} does not match the declared layout")]
    TypeMismatch {
        /// Position of the offending value.
        index: usize,
    },
}

/// Slices the result buffer into 32 byte words and extracts one typed value
/// per descriptor, in descriptor order.
///
/// The buffer must be a positive multiple of 32 bytes long and hold at least
/// as many words as there are descriptors; trailing words beyond the layout
/// are ignored. Never produces a partial result.
pub fn decode_words(
    layout: &[TypeDescriptor],
    data: &[u8],
) -> Result<Vec<DecodedValue>, DecodeError> {
    if data.is_empty() || data.len() % WORD_SIZE != 0 {
        return Err(DecodeError::InvalidLength(data.len()));
    }
    let words = data.len() / WORD_SIZE;
    if words < layout.len() {
        return Err(DecodeError::Truncated {
            expected: layout.len(),
            actual: words,
        });
    }
    Ok(layout
        .iter()
        .enumerate()
        .map(|(i, descriptor)| decode_word(descriptor, &data[i * WORD_SIZE..(i + 1) * WORD_SIZE]))
        .collect())
}

// Static abi values are right aligned within their word, so an uint of width
// w is the big endian value of the word masked to its final w bits.
fn decode_word(descriptor: &TypeDescriptor, word: &[u8]) -> DecodedValue {
    match descriptor {
        TypeDescriptor::UnsignedInt(bits) => {
            DecodedValue::Uint(U256::from_big_endian(word) & low_bits(*bits))
        }
        TypeDescriptor::Address => DecodedValue::Address(H160::from_slice(&word[12..])),
    }
}
