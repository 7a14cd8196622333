//! Fetch and decode Aave v2 reserve data
//!
//! This crate queries `getReserveData(address)` on the LendingPool contract
//! through a raw json-rpc `eth_call` and decodes the fixed 12 word return
//! layout, including the packed reserve configuration bitmap.
//!
//! ```no_run
//! # use reserve_decoder::Config;
//! #
//! tokio_test::block_on(async {
//!     // Ideally use your own rpc endpoint url (for example using infura / alchemy etc key)
//!     let config = Config::mainnet("https://rpc.ankr.com/eth");
//!     let weth = hex::decode("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2").unwrap();
//!     let reserve = reserve_decoder::get_reserve_data(&weth, 18_000_000, &config)
//!         .await
//!         .unwrap();
//!
//!     println!("ltv: {}", reserve.configuration_fields().get("ltv").unwrap());
//! })
//! ```
#![warn(missing_docs)]
use ethereum_types::H160;

pub mod bitfield;
pub mod call;
pub mod decoder;
mod error;
pub mod reserve;
pub mod rpc;
pub mod selector;
#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use reserve::ReserveData;

use call::CallRequest;
use decoder::decode_words;
use selector::{function_selector, GET_RESERVE_DATA_SIGNATURE};

/// Where to send the call: json-rpc endpoint and LendingPool deployment.
///
/// Passed in explicitly so the core never reads process-wide state; the
/// binary resolves the endpoint from its arguments or environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Json-rpc endpoint url.
    pub rpc_url: String,
    /// LendingPool contract to query.
    pub lending_pool: H160,
}

impl Config {
    /// Configuration for an arbitrary LendingPool deployment.
    pub fn new(rpc_url: impl Into<String>, lending_pool: H160) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            lending_pool,
        }
    }

    /// Configuration for the canonical mainnet deployment.
    pub fn mainnet(rpc_url: impl Into<String>) -> Self {
        Self::new(rpc_url, reserve::AAVE_V2_LENDING_POOL)
    }
}

/// Fetches and decodes the reserve data of the given asset at the given block.
///
/// `asset` is the raw 20 byte address of the underlying token; anything of a
/// different length fails with [`Error::InvalidAddress`] before any network
/// traffic happens.
pub async fn get_reserve_data(
    asset: &[u8],
    block: u64,
    config: &Config,
) -> Result<ReserveData, Error> {
    let selector = function_selector(GET_RESERVE_DATA_SIGNATURE);
    let request = CallRequest::new(config.lending_pool, selector, asset)?;
    let raw = rpc::eth_call(&config.rpc_url, &request, block).await?;
    let values = decode_words(reserve::RESERVE_DATA_LAYOUT, &raw)?;
    Ok(ReserveData::from_values(&values)?)
}
