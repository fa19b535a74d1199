//! Chain-side library for the Covenant escrow protocol.
//!
//! Covenant locks CVT deposits in an escrow contract until a commitment
//! settles. The web app drives exactly two kinds of on-chain traffic: an
//! ERC-20 `approve` granting the escrow contract spending rights, and
//! read-only `allowance`/`balanceOf` queries. Everything needed for that
//! lives here, and all of it is WASM-safe: no transport, no signer, no
//! tokio. Calldata goes out through whatever wallet or RPC client the
//! caller has.
//!
//! Modules:
//! - [`constants`]: chain ids, contract addresses, endpoints
//! - [`erc20`]: ABI encode/decode for the minimal token surface
//! - [`units`]: decimal string <-> base-unit conversion (18 decimals)
//! - [`session`]: the approve-flow state machine and request validation
//! - [`rpc`]: JSON-RPC 2.0 request/response wire types
//! - [`escrow`]: commitment records shown on the DAO dashboard
//! - [`format`]: display helpers (addresses, amounts, deadlines)
//! - [`error`]: the [`CovenantError`] type everything above returns

pub mod constants;
pub mod erc20;
pub mod error;
pub mod escrow;
pub mod format;
pub mod rpc;
pub mod session;
pub mod units;

use alloy::sol;

// Minimal ERC-20 surface the app touches. No #[sol(rpc)] -- calldata is
// encoded here and goes out through the wallet or a raw eth_call.
sol! {
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 value) external returns (bool);

        event Approval(address indexed owner, address indexed spender, uint256 value);
    }
}

// Re-exports
pub use alloy::primitives::{Address, B256, U256};
pub use constants::ChainConfig;
pub use constants::*;
pub use error::CovenantError;
pub use escrow::{Commitment, CommitmentStatus, TreasuryStats};
pub use session::{PayRequest, PaymentPhase, PaymentSession};
