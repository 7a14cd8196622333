use crate::error::Error;
use ethereum_types::H160;

/// An immutable `eth_call` request: target contract, selector and the
/// abi encoded argument word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    /// Contract the call is routed to.
    pub to: H160,
    selector: [u8; 4],
    args: [u8; 32],
}

impl CallRequest {
    /// Builds a request for a view function taking a single address argument.
    pub fn new(to: H160, selector: [u8; 4], address_arg: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            to,
            selector,
            args: abi_encode_address(address_arg)?,
        })
    }

    /// Selector followed by the encoded argument bytes.
    pub fn calldata(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.selector.len() + self.args.len());
        data.extend_from_slice(&self.selector);
        data.extend_from_slice(&self.args);
        data
    }
}

/// Encodes a 20 byte address as a static abi word, left padded with zeros.
pub fn abi_encode_address(address: &[u8]) -> Result<[u8; 32], Error> {
    if address.len() != 20 {
        return Err(Error::InvalidAddress(address.len()));
    }
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address);
    Ok(word)
}

/// Encodes a block number in the json-rpc quantity convention: minimal hex,
/// no leading zeros, `0x0` for zero.
pub fn encode_quantity(value: u64) -> String {
    format!("{:#x}", value)
}
