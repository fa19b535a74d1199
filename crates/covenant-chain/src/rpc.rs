//! JSON-RPC 2.0 wire types for the small Ethereum surface the app uses.
//!
//! Only two methods matter: `eth_call` for token reads and
//! `eth_getTransactionReceipt` for confirmation polling. The transport is
//! the caller's problem; these types just get the JSON right.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::erc20;
use crate::error::CovenantError;

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: Value,
    pub id: u64,
}

impl RpcRequest {
    /// `eth_call` against `to` with raw calldata, at the latest block.
    pub fn eth_call(id: u64, to: Address, calldata: &[u8]) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "eth_call",
            params: json!([
                { "to": format!("{to}"), "data": erc20::hex_data(calldata) },
                "latest",
            ]),
            id,
        }
    }

    /// `eth_getTransactionReceipt` for a submitted transaction.
    pub fn transaction_receipt(id: u64, tx_hash: &str) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "eth_getTransactionReceipt",
            params: json!([tx_hash]),
            id,
        }
    }
}

/// A JSON-RPC 2.0 response envelope. Either `result` or `error` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// The node-reported error object.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

impl RpcResponse {
    /// The hex string result of a call, or the node's error.
    pub fn into_hex(self) -> Result<String, CovenantError> {
        if let Some(err) = self.error {
            return Err(CovenantError::RpcError(format!("{} (code {})", err.message, err.code)));
        }
        match self.result {
            Some(Value::String(s)) => Ok(s),
            other => Err(CovenantError::RpcError(format!("expected hex result, got {other:?}"))),
        }
    }

    /// The raw bytes of a call result.
    pub fn into_bytes(self) -> Result<Vec<u8>, CovenantError> {
        let hex = self.into_hex()?;
        erc20::from_hex_data(&hex)
    }

    /// The receipt, or `None` while the transaction is still pending.
    pub fn into_receipt(self) -> Result<Option<TxReceipt>, CovenantError> {
        if let Some(err) = self.error {
            return Err(CovenantError::RpcError(format!("{} (code {})", err.message, err.code)));
        }
        match self.result {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(CovenantError::SerdeError),
        }
    }
}

/// The slice of a transaction receipt the approve flow cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    pub transaction_hash: String,
    /// "0x1" on success, "0x0" on revert.
    pub status: String,
    #[serde(default)]
    pub block_number: Option<String>,
}

impl TxReceipt {
    pub fn succeeded(&self) -> bool {
        self.status == "0x1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ESCROW, TOKEN};
    use alloy::primitives::U256;

    #[test]
    fn test_eth_call_wire_shape() {
        let calldata = erc20::allowance_calldata(ESCROW, ESCROW);
        let req = RpcRequest::eth_call(1, TOKEN, &calldata);
        let wire: Value = serde_json::to_value(&req).unwrap();

        assert_eq!(wire["jsonrpc"], "2.0");
        assert_eq!(wire["method"], "eth_call");
        assert_eq!(wire["id"], 1);
        assert_eq!(wire["params"][1], "latest");
        let data = wire["params"][0]["data"].as_str().unwrap();
        assert!(data.starts_with("0xdd62ed3e"));
        let to = wire["params"][0]["to"].as_str().unwrap();
        assert!(to.starts_with("0x") && to.len() == 42);
    }

    #[test]
    fn test_receipt_request_wire_shape() {
        let req = RpcRequest::transaction_receipt(7, "0xdeadbeef");
        let wire: Value = serde_json::to_value(&req).unwrap();
        assert_eq!(wire["method"], "eth_getTransactionReceipt");
        assert_eq!(wire["params"][0], "0xdeadbeef");
        assert_eq!(wire["id"], 7);
    }

    #[test]
    fn test_call_result_decodes_uint() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":"0x00000000000000000000000000000000000000000000000000000000000003e8"}"#;
        let resp: RpcResponse = serde_json::from_str(body).unwrap();
        let value = erc20::decode_uint(&resp.into_bytes().unwrap()).unwrap();
        assert_eq!(value, U256::from(1_000));
    }

    #[test]
    fn test_node_error_surfaces() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"execution reverted"}}"#;
        let resp: RpcResponse = serde_json::from_str(body).unwrap();
        let err = resp.into_hex().unwrap_err();
        assert!(err.to_string().contains("execution reverted"));
    }

    #[test]
    fn test_pending_receipt_is_none() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":null}"#;
        let resp: RpcResponse = serde_json::from_str(body).unwrap();
        assert!(resp.into_receipt().unwrap().is_none());
    }

    #[test]
    fn test_receipt_status_parsing() {
        let ok = r#"{"jsonrpc":"2.0","id":1,"result":{"transactionHash":"0xabc","status":"0x1","blockNumber":"0x10"}}"#;
        let resp: RpcResponse = serde_json::from_str(ok).unwrap();
        let receipt = resp.into_receipt().unwrap().unwrap();
        assert!(receipt.succeeded());
        assert_eq!(receipt.transaction_hash, "0xabc");

        let reverted = r#"{"jsonrpc":"2.0","id":1,"result":{"transactionHash":"0xabc","status":"0x0"}}"#;
        let resp: RpcResponse = serde_json::from_str(reverted).unwrap();
        assert!(!resp.into_receipt().unwrap().unwrap().succeeded());
    }
}
