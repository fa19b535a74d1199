//! ABI encode/decode helpers for the minimal ERC-20 surface.
//!
//! The browser never holds a provider: `approve` calldata goes out through
//! the wallet's `eth_sendTransaction`, and the read calls go out as raw
//! `eth_call` payloads. These helpers produce and consume those bytes.

use alloy::primitives::{Address, U256};
use alloy::sol_types::{SolCall, SolValue};

use crate::error::CovenantError;
use crate::IERC20;

/// Calldata for `approve(spender, value)`.
pub fn approve_calldata(spender: Address, value: U256) -> Vec<u8> {
    IERC20::approveCall { spender, value }.abi_encode()
}

/// Calldata for `allowance(owner, spender)`.
pub fn allowance_calldata(owner: Address, spender: Address) -> Vec<u8> {
    IERC20::allowanceCall { owner, spender }.abi_encode()
}

/// Calldata for `balanceOf(owner)`.
pub fn balance_of_calldata(owner: Address) -> Vec<u8> {
    IERC20::balanceOfCall { owner }.abi_encode()
}

/// Decode the single `uint256` word returned by `allowance`/`balanceOf`.
pub fn decode_uint(data: &[u8]) -> Result<U256, CovenantError> {
    <U256 as SolValue>::abi_decode(data)
        .map_err(|e| CovenantError::ChainError(format!("bad uint256 return: {e}")))
}

/// `0x`-prefixed hex for calldata and other wire bytes.
pub fn hex_data(data: &[u8]) -> String {
    format!("0x{}", alloy::hex::encode(data))
}

/// Decode a `0x`-prefixed hex string from an RPC result.
pub fn from_hex_data(data: &str) -> Result<Vec<u8>, CovenantError> {
    let stripped = data.strip_prefix("0x").unwrap_or(data);
    alloy::hex::decode(stripped).map_err(|e| CovenantError::RpcError(format!("bad hex result: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ESCROW, TOKEN};

    fn word(value: u64) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&value.to_be_bytes());
        out
    }

    #[test]
    fn test_approve_selector_and_args() {
        let amount = U256::from(1_000u64);
        let data = approve_calldata(ESCROW, amount);
        // Canonical ERC-20 approve selector.
        assert_eq!(&data[..4], &[0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(data.len(), 4 + 32 + 32);
        // Address is right-aligned in its word.
        assert_eq!(&data[16..36], ESCROW.as_slice());
        assert_eq!(&data[36..68], &word(1_000));
    }

    #[test]
    fn test_allowance_selector_and_args() {
        let owner = Address::new([0x11; 20]);
        let data = allowance_calldata(owner, ESCROW);
        assert_eq!(&data[..4], &[0xdd, 0x62, 0xed, 0x3e]);
        assert_eq!(&data[16..36], owner.as_slice());
        assert_eq!(&data[48..68], ESCROW.as_slice());
    }

    #[test]
    fn test_balance_of_selector() {
        let data = balance_of_calldata(TOKEN);
        assert_eq!(&data[..4], &[0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(data.len(), 4 + 32);
    }

    #[test]
    fn test_generated_selectors_match_canon() {
        assert_eq!(IERC20::approveCall::SELECTOR, [0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(IERC20::allowanceCall::SELECTOR, [0xdd, 0x62, 0xed, 0x3e]);
        assert_eq!(IERC20::balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn test_decode_uint_word() {
        assert_eq!(decode_uint(&word(42)).unwrap(), U256::from(42));
        assert_eq!(decode_uint(&word(0)).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_decode_uint_rejects_short_data() {
        assert!(decode_uint(&[]).is_err());
        assert!(decode_uint(&[0x01, 0x02]).is_err());
    }

    #[test]
    fn test_hex_data_round_trip() {
        let data = approve_calldata(ESCROW, U256::from(7));
        let hex = hex_data(&data);
        assert!(hex.starts_with("0x095ea7b3"));
        assert_eq!(from_hex_data(&hex).unwrap(), data);
    }

    #[test]
    fn test_from_hex_data_rejects_garbage() {
        assert!(from_hex_data("0xzz").is_err());
    }
}
