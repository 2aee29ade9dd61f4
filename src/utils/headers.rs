use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Normalizes a stored header blob into a plain name -> value mapping.
///
/// The blob arrives in one of two shapes: a JSON object of headers, or a
/// wrapper object `{"Bytes": <base64 of the real header JSON>, "Status": n}`
/// produced by serializers that externalize raw bytes. The wrapper branch is
/// detected by a `"Bytes"` key holding a string. The `"Bytes"` and
/// `"Status"` artifact keys are stripped from the result in both branches.
///
/// Every malformed input (non-object JSON, bad base64, bad nested JSON) is a
/// `Decode` error returned to the caller.
pub fn extract_header_json_data(blob: &[u8]) -> Result<Map<String, Value>> {
    let mut data: Map<String, Value> = serde_json::from_slice(blob)
        .map_err(|e| Error::Decode(format!("header blob is not a JSON object: {}", e)))?;

    if let Some(Value::String(encoded)) = data.get("Bytes") {
        let decoded = STANDARD
            .decode(encoded)
            .map_err(|e| Error::Decode(format!("invalid base64 in Bytes field: {}", e)))?;
        data = serde_json::from_slice(&decoded)
            .map_err(|e| Error::Decode(format!("decoded Bytes is not a JSON object: {}", e)))?;
    }

    data.remove("Bytes");
    data.remove("Status");

    Ok(data)
}
