use alloy::primitives::Address;

/// Base Sepolia chain ID.
pub const CHAIN_ID: u64 = 84532;

/// CAIP-2 network identifier for Base Sepolia.
pub const NETWORK: &str = "eip155:84532";

/// CVT token address on Base Sepolia.
pub const TOKEN: Address = Address::new([
    0xc0, 0x5e, 0x4a, 0x11, 0x7d, 0x0e, 0x8a, 0x93, 0x4b, 0x1f, 0x52, 0x66, 0x90, 0x3d, 0x27, 0xaa,
    0x08, 0x14, 0xce, 0xb1,
]);

/// CVT uses the standard 18 decimal places.
pub const TOKEN_DECIMALS: u32 = 18;

/// Token ticker shown in the UI.
pub const TOKEN_SYMBOL: &str = "CVT";

/// Covenant escrow contract on Base Sepolia. Default `approve` spender.
pub const ESCROW: Address = Address::new([
    0xe5, 0xc7, 0x09, 0x6e, 0x21, 0x4c, 0x4f, 0x1a, 0x8d, 0x5b, 0x00, 0xd2, 0x2f, 0x84, 0xbb, 0x31,
    0xc6, 0x7f, 0x0a, 0x42,
]);

/// Default RPC endpoint for Base Sepolia.
pub const RPC_URL: &str = "https://sepolia.base.org";

/// Block explorer base URL.
pub const EXPLORER_BASE: &str = "https://sepolia.basescan.org";

/// Runtime chain configuration. Decouples the app and any future tooling
/// from compile-time constants, enabling multi-chain deployments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub network: String,
    pub token: Address,
    pub token_decimals: u32,
    pub token_symbol: String,
    pub escrow: Address,
    pub rpc_url: String,
    pub explorer_base: String,
}

impl Default for ChainConfig {
    /// Defaults to the Base Sepolia deployment.
    fn default() -> Self {
        Self {
            chain_id: CHAIN_ID,
            network: NETWORK.to_string(),
            token: TOKEN,
            token_decimals: TOKEN_DECIMALS,
            token_symbol: TOKEN_SYMBOL.to_string(),
            escrow: ESCROW,
            rpc_url: RPC_URL.to_string(),
            explorer_base: EXPLORER_BASE.to_string(),
        }
    }
}

impl ChainConfig {
    /// Hex chain id as wallets report it from `eth_chainId`.
    pub fn chain_id_hex(&self) -> String {
        format!("0x{:x}", self.chain_id)
    }

    /// Explorer link for a transaction hash.
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_base, tx_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_constants() {
        let config = ChainConfig::default();
        assert_eq!(config.chain_id, 84532);
        assert_eq!(config.network, "eip155:84532");
        assert_eq!(config.token, TOKEN);
        assert_eq!(config.escrow, ESCROW);
        assert_eq!(config.token_decimals, 18);
    }

    #[test]
    fn test_chain_id_hex_is_wallet_shaped() {
        assert_eq!(ChainConfig::default().chain_id_hex(), "0x14a34");
    }

    #[test]
    fn test_tx_url_joins_explorer_base() {
        let url = ChainConfig::default().tx_url("0xabc");
        assert_eq!(url, "https://sepolia.basescan.org/tx/0xabc");
    }
}
