use thiserror::Error;

/// Errors returned by Covenant chain operations.
#[derive(Debug, Error)]
pub enum CovenantError {
    #[error("wallet not connected")]
    WalletNotConnected,

    #[error("no spender address provided")]
    MissingSpender,

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("approval already in progress")]
    ApprovalInFlight,

    #[error("chain error: {0}")]
    ChainError(String),

    #[error("rpc error: {0}")]
    RpcError(String),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
