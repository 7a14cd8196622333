use crate::call::{encode_quantity, CallRequest};
use crate::decoder::DecodeError;
use crate::error::Error;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Response envelope of a json-rpc call; exactly one of `result` or `error`
/// is expected to be present.
#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcResponse {
    result: Option<String>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

impl JsonRpcResponse {
    // Any non-success shape (error member, missing result, non-hex result)
    // is a failed call; the decoder must never see its bytes.
    pub(crate) fn result_bytes(self) -> Result<Vec<u8>, DecodeError> {
        if let Some(error) = self.error {
            return Err(DecodeError::CallFailed(format!(
                "rpc error {}: {}",
                error.code, error.message
            )));
        }
        let result = self.result.ok_or_else(|| {
            DecodeError::CallFailed("response contains neither result nor error".to_string())
        })?;
        hex::decode(result.trim_start_matches("0x"))
            .map_err(|e| DecodeError::CallFailed(format!("result is not valid hex: {}", e)))
    }
}

/// Executes the request as an `eth_call` against the given endpoint and
/// returns the raw result bytes.
///
/// Any non-success envelope (http failure status, an `error` member, or a
/// missing `result`) becomes [`DecodeError::CallFailed`], so decoding never
/// proceeds on a failed call.
pub async fn eth_call(rpc_url: &str, request: &CallRequest, block: u64) -> Result<Vec<u8>, Error> {
    let payload = json!({
        "jsonrpc": "2.0",
        "method": "eth_call",
        "params": [
            {
                "to": format!("{:?}", request.to),
                "data": format!("0x{}", hex::encode(request.calldata())),
            },
            encode_quantity(block),
        ],
        "id": 1,
    });
    debug!(rpc_url, block, to = ?request.to, "sending eth_call");

    let response = reqwest::Client::new()
        .post(rpc_url)
        .json(&payload)
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(DecodeError::CallFailed(format!("http status {}", response.status())).into());
    }

    let envelope: JsonRpcResponse = response.json().await?;
    let bytes = envelope.result_bytes()?;
    debug!(result_len = bytes.len(), "eth_call succeeded");
    Ok(bytes)
}
