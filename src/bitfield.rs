use ethereum_types::U256;
use std::fmt;

/// One named bit range within a packed configuration word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    /// Field name, reported verbatim in the parsed record.
    pub name: &'static str,
    /// Offset of the lowest bit of the range.
    pub offset: usize,
    /// Number of bits in the range.
    pub width: usize,
}

/// Value extracted for one bit range. Single bit ranges surface as flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigValue {
    /// Raw value of a multi-bit range.
    Uint(U256),
    /// A one-bit range, set iff the bit is set.
    Flag(bool),
}

impl ConfigValue {
    /// The numeric value of the range, with flags reading as 0 or 1.
    pub fn as_uint(&self) -> U256 {
        match self {
            ConfigValue::Uint(value) => *value,
            ConfigValue::Flag(flag) => U256::from(*flag as u64),
        }
    }

    /// The boolean reading of a one-bit range.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ConfigValue::Flag(flag) => Some(*flag),
            ConfigValue::Uint(_) => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Uint(value) => write!(f, "{}", value),
            ConfigValue::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

/// Named field values, ordered like the bit-field table they were parsed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveConfigRecord {
    fields: Vec<(&'static str, ConfigValue)>,
}

impl ReserveConfigRecord {
    /// Looks a field up by name.
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.fields
            .iter()
            .find(|(field_name, _)| *field_name == name)
            .map(|(_, value)| value)
    }

    /// Iterates fields in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, (&'static str, ConfigValue)> {
        self.fields.iter()
    }
}

/// Extracts every field of the table from the packed word by shift and mask.
///
/// Total for any input: bits outside the declared ranges are ignored, and a
/// word wider than the table still parses (the extra bits simply never land
/// in a field).
pub fn parse_bitfields(word: U256, fields: &[BitField]) -> ReserveConfigRecord {
    let fields = fields
        .iter()
        .map(|field| {
            let raw = (word >> field.offset) & low_bits(field.width);
            let value = if field.width == 1 {
                ConfigValue::Flag(!raw.is_zero())
            } else {
                ConfigValue::Uint(raw)
            };
            (field.name, value)
        })
        .collect();
    ReserveConfigRecord { fields }
}

// Mask covering the lowest `width` bits.
pub(crate) fn low_bits(width: usize) -> U256 {
    if width >= 256 {
        U256::max_value()
    } else {
        (U256::one() << width) - U256::one()
    }
}
