//! JSON-RPC transport: token reads and receipt polling over HTTP.

use covenant::rpc::{RpcRequest, RpcResponse, TxReceipt};
use covenant::{erc20, Address, U256};
use gloo_timers::future::TimeoutFuture;

/// RPC endpoint -- defaults to the public Base Sepolia node.
/// Override at compile time via COVENANT_RPC_URL for dev/testing.
const RPC_URL: &str = {
    match option_env!("COVENANT_RPC_URL") {
        Some(url) => url,
        None => covenant::RPC_URL,
    }
};

/// Receipt polling cadence and bound. The submit has already succeeded
/// by the time this runs; the bound only caps how long we wait to report
/// confirmation.
const RECEIPT_ATTEMPTS: u32 = 45;
const RECEIPT_POLL_MS: u32 = 2_000;

async fn post(request: &RpcRequest) -> Result<RpcResponse, String> {
    let body =
        serde_json::to_string(request).map_err(|e| format!("Failed to serialize: {}", e))?;

    let resp = gloo_net::http::Request::post(RPC_URL)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("RPC request failed: {}", e))?;

    if !resp.ok() {
        return Err(format!("RPC returned HTTP {}", resp.status()));
    }

    resp.json::<RpcResponse>()
        .await
        .map_err(|e| format!("Bad RPC response: {}", e))
}

/// Read `allowance(owner, spender)` on the CVT token.
pub async fn allowance(owner: Address, spender: Address) -> Result<U256, String> {
    let calldata = erc20::allowance_calldata(owner, spender);
    let request = RpcRequest::eth_call(1, covenant::TOKEN, &calldata);
    let bytes = post(&request).await?.into_bytes().map_err(|e| e.to_string())?;
    erc20::decode_uint(&bytes).map_err(|e| e.to_string())
}

/// Read `balanceOf(owner)` on the CVT token.
pub async fn balance_of(owner: Address) -> Result<U256, String> {
    let calldata = erc20::balance_of_calldata(owner);
    let request = RpcRequest::eth_call(1, covenant::TOKEN, &calldata);
    let bytes = post(&request).await?.into_bytes().map_err(|e| e.to_string())?;
    erc20::decode_uint(&bytes).map_err(|e| e.to_string())
}

/// Poll until the transaction lands, erroring on revert or timeout.
pub async fn wait_for_receipt(tx_hash: &str) -> Result<TxReceipt, String> {
    for attempt in 0..RECEIPT_ATTEMPTS {
        if attempt > 0 {
            TimeoutFuture::new(RECEIPT_POLL_MS).await;
        }

        let request = RpcRequest::transaction_receipt(1, tx_hash);
        match post(&request).await {
            Ok(resp) => match resp.into_receipt() {
                Ok(Some(receipt)) => {
                    if !receipt.succeeded() {
                        return Err("Approve transaction reverted".to_string());
                    }
                    return Ok(receipt);
                }
                Ok(None) => {}
                Err(e) => return Err(e.to_string()),
            },
            Err(e) => {
                // A transport blip must not fail a transaction that is
                // already in the mempool; keep polling.
                web_sys::console::warn_1(&format!("Receipt poll failed: {}", e).into());
            }
        }
    }

    Err(format!(
        "No confirmation after {}s",
        RECEIPT_ATTEMPTS * RECEIPT_POLL_MS / 1_000
    ))
}
