use crate::bitfield::{parse_bitfields, BitField, ReserveConfigRecord};
use crate::decoder::{DecodeError, DecodedValue, TypeDescriptor};
use ethereum_types::{H160, U256};

/// The Aave v2 LendingPool deployment on mainnet.
pub const AAVE_V2_LENDING_POOL: H160 = H160([
    0x7d, 0x27, 0x68, 0xde, 0x32, 0xb0, 0xb8, 0x0b, 0x7a, 0x34, 0x54, 0xc0, 0x6b, 0xda, 0xc9,
    0x4a, 0x69, 0xdd, 0xc7, 0xa9,
]);

/// Return layout of `getReserveData(address)`, in declaration order.
pub const RESERVE_DATA_LAYOUT: &[TypeDescriptor] = &[
    TypeDescriptor::UnsignedInt(256), // configuration bitmap
    TypeDescriptor::UnsignedInt(128), // liquidityIndex
    TypeDescriptor::UnsignedInt(128), // variableBorrowIndex
    TypeDescriptor::UnsignedInt(128), // currentLiquidityRate
    TypeDescriptor::UnsignedInt(128), // currentVariableBorrowRate
    TypeDescriptor::UnsignedInt(128), // currentStableBorrowRate
    TypeDescriptor::UnsignedInt(40),  // lastUpdateTimestamp
    TypeDescriptor::Address,          // aTokenAddress
    TypeDescriptor::Address,          // stableDebtTokenAddress
    TypeDescriptor::Address,          // variableDebtTokenAddress
    TypeDescriptor::Address,          // interestRateStrategyAddress
    TypeDescriptor::UnsignedInt(8),   // id
];

/// Bit layout of the reserve configuration map.
///
/// Matches the documented Aave v2 layout; bits 60..64 are reserved and
/// bits above 79 are unused in that version.
pub const RESERVE_CONFIG_FIELDS: &[BitField] = &[
    BitField { name: "ltv", offset: 0, width: 16 },
    BitField { name: "liquidation_threshold", offset: 16, width: 16 },
    BitField { name: "liquidation_bonus", offset: 32, width: 16 },
    BitField { name: "decimals", offset: 48, width: 8 },
    BitField { name: "is_active", offset: 56, width: 1 },
    BitField { name: "is_frozen", offset: 57, width: 1 },
    BitField { name: "borrowing_enabled", offset: 58, width: 1 },
    BitField { name: "stable_borrowing_enabled", offset: 59, width: 1 },
    BitField { name: "reserve_factor", offset: 64, width: 16 },
];

/// The decoded `getReserveData` return struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveData {
    /// Packed reserve configuration bitmap, see [`RESERVE_CONFIG_FIELDS`].
    pub configuration: U256,
    /// Cumulated liquidity index, in ray.
    pub liquidity_index: U256,
    /// Cumulated variable borrow index, in ray.
    pub variable_borrow_index: U256,
    /// Current supply rate, in ray.
    pub current_liquidity_rate: U256,
    /// Current variable borrow rate, in ray.
    pub current_variable_borrow_rate: U256,
    /// Current stable borrow rate, in ray.
    pub current_stable_borrow_rate: U256,
    /// Unix timestamp of the last reserve update.
    pub last_update_timestamp: U256,
    /// aToken contract of the reserve.
    pub a_token_address: H160,
    /// Stable debt token contract of the reserve.
    pub stable_debt_token_address: H160,
    /// Variable debt token contract of the reserve.
    pub variable_debt_token_address: H160,
    /// Interest rate strategy contract of the reserve.
    pub interest_rate_strategy_address: H160,
    /// Position of the reserve in the pool's reserve list.
    pub id: U256,
}

impl ReserveData {
    /// Maps the ordered values decoded with [`RESERVE_DATA_LAYOUT`] onto the
    /// named struct fields.
    pub fn from_values(values: &[DecodedValue]) -> Result<Self, DecodeError> {
        Ok(Self {
            configuration: uint_at(values, 0)?,
            liquidity_index: uint_at(values, 1)?,
            variable_borrow_index: uint_at(values, 2)?,
            current_liquidity_rate: uint_at(values, 3)?,
            current_variable_borrow_rate: uint_at(values, 4)?,
            current_stable_borrow_rate: uint_at(values, 5)?,
            last_update_timestamp: uint_at(values, 6)?,
            a_token_address: address_at(values, 7)?,
            stable_debt_token_address: address_at(values, 8)?,
            variable_debt_token_address: address_at(values, 9)?,
            interest_rate_strategy_address: address_at(values, 10)?,
            id: uint_at(values, 11)?,
        })
    }

    /// Unpacks the configuration bitmap into its named fields.
    pub fn configuration_fields(&self) -> ReserveConfigRecord {
        parse_bitfields(self.configuration, RESERVE_CONFIG_FIELDS)
    }
}

fn uint_at(values: &[DecodedValue], index: usize) -> Result<U256, DecodeError> {
    values
        .get(index)
        .and_then(|value| value.as_uint())
        .ok_or(DecodeError::TypeMismatch { index })
}

fn address_at(values: &[DecodedValue], index: usize) -> Result<H160, DecodeError> {
    values
        .get(index)
        .and_then(|value| value.as_address())
        .ok_or(DecodeError::TypeMismatch { index })
}
