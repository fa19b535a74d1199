//! Browser wallet (`window.ethereum`) bindings: connect and submit.
//!
//! Everything here speaks the injected-provider request API. Calldata is
//! built by the `covenant` crate; this module only moves it across the
//! JS boundary and hands back strings.

#![allow(deprecated)]

use covenant::Address;
use wasm_bindgen::prelude::*;

use crate::WalletState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, js_name = ethereum)]
    static ETHEREUM: JsValue;

    #[wasm_bindgen(catch, js_namespace = ["window", "ethereum"], js_name = request)]
    async fn ethereum_request(args: &JsValue) -> Result<JsValue, JsValue>;
}

/// True when a Web3 provider is injected into the page.
pub fn has_provider() -> bool {
    !(ETHEREUM.is_undefined() || ETHEREUM.is_null())
}

fn build_request(method: &str) -> Result<js_sys::Object, String> {
    let request = js_sys::Object::new();
    js_sys::Reflect::set(&request, &"method".into(), &method.into())
        .map_err(|e| format!("Failed to build request: {:?}", e))?;
    Ok(request)
}

/// Connect to the browser wallet (MetaMask, etc.)
pub async fn connect() -> Result<WalletState, String> {
    if !has_provider() {
        return Err("No Web3 wallet detected. Please install MetaMask.".to_string());
    }

    let request = build_request("eth_requestAccounts")?;
    let accounts = ethereum_request(&request)
        .await
        .map_err(|e| format!("Wallet connection failed: {:?}", e))?;

    let accounts_array = js_sys::Array::from(&accounts);
    if accounts_array.length() == 0 {
        return Err("No accounts found".to_string());
    }

    let address: Address = accounts_array
        .get(0)
        .as_string()
        .ok_or("Invalid address")?
        .parse()
        .map_err(|e| format!("Unparseable account address: {}", e))?;

    let chain_request = build_request("eth_chainId")?;
    let chain_id = ethereum_request(&chain_request)
        .await
        .map_err(|e| format!("Failed to get chain ID: {:?}", e))?
        .as_string();

    Ok(WalletState {
        connected: true,
        address: Some(address),
        chain_id,
    })
}

/// Submit a transaction through the wallet. Returns the transaction hash
/// once the user signs; rejection comes back as an error string.
pub async fn send_transaction(from: Address, to: Address, calldata: &[u8]) -> Result<String, String> {
    if !has_provider() {
        return Err("No Web3 wallet detected. Please install MetaMask.".to_string());
    }

    let tx = js_sys::Object::new();
    js_sys::Reflect::set(&tx, &"from".into(), &format!("{from}").into())
        .map_err(|e| format!("Failed to set from: {:?}", e))?;
    js_sys::Reflect::set(&tx, &"to".into(), &format!("{to}").into())
        .map_err(|e| format!("Failed to set to: {:?}", e))?;
    js_sys::Reflect::set(&tx, &"data".into(), &covenant::erc20::hex_data(calldata).into())
        .map_err(|e| format!("Failed to set data: {:?}", e))?;

    let request = build_request("eth_sendTransaction")?;
    let params = js_sys::Array::new();
    params.push(&tx);
    js_sys::Reflect::set(&request, &"params".into(), &params)
        .map_err(|e| format!("Failed to set params: {:?}", e))?;

    let tx_hash = ethereum_request(&request)
        .await
        .map_err(|e| format!("Transaction rejected: {:?}", e))?
        .as_string()
        .ok_or("Invalid transaction hash")?;

    Ok(tx_hash)
}
