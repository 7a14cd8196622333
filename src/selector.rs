use ethers::utils::keccak256;

/// Canonical signature of the LendingPool reserve data getter.
pub const GET_RESERVE_DATA_SIGNATURE: &str = "getReserveData(address)";

/// Computes the function selector (first 4 bytes of the keccak-256 hash of
/// the canonical signature).
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}
