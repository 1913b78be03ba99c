use strum::VariantNames;
use wasm_bindgen::prelude::*;

use crate::envelope::Outcome;
use crate::types::{self, PayloadKind};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"failure": msg});
    to_js(&obj)
}

/// Decode an envelope, choosing the payload shape by name
/// (`customer`, `supplier`, `text` or `raw`).
///
/// Returns `{type, data, error}` with exactly one of `data`/`error` set, or
/// `{failure}` when the input could not be decoded at all.
#[wasm_bindgen(js_name = decodeEnvelope)]
pub fn decode_envelope(payload_kind: &str, json: &str) -> JsValue {
    let Ok(kind) = payload_kind.parse::<PayloadKind>() else {
        return error_result(&format!("Unknown payload kind \"{payload_kind}\""));
    };

    let envelope = match types::decode_as(kind, json) {
        Ok(envelope) => envelope,
        Err(err) => return error_result(&err.to_string()),
    };

    let (data, error) = match envelope.outcome() {
        Outcome::Data(payload) => (serde_json::to_value(payload), Ok(serde_json::Value::Null)),
        Outcome::Error(err) => (Ok(serde_json::Value::Null), serde_json::to_value(err)),
    };
    match (data, error) {
        (Ok(data), Ok(error)) => to_js(&serde_json::json!({
            "type": envelope.kind(),
            "data": data,
            "error": error,
            "errorMessage": envelope.error_message(),
        })),
        (Err(err), _) | (_, Err(err)) => error_result(&err.to_string()),
    }
}

/// Payload kinds accepted by [`decode_envelope`].
#[wasm_bindgen(js_name = payloadKinds)]
pub fn payload_kinds() -> JsValue {
    let names: Vec<serde_json::Value> = PayloadKind::VARIANTS
        .iter()
        .map(|name| serde_json::Value::String((*name).to_string()))
        .collect();
    to_js(&serde_json::Value::Array(names))
}
