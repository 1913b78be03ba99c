use serde::de::DeserializeOwned;

use crate::envelope::{Envelope, EnvelopeKind, Outcome};
use crate::error::Error;

/// First-pass shape: the discriminator plus the untouched payload node.
#[derive(serde::Deserialize)]
struct RawEnvelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Decode a `{ "type": ..., "data": ... }` document into an [`Envelope<T>`].
///
/// The payload node is read into `T` unless `type` is `"error"`, in which
/// case it is read as an [`ApiError`](crate::ApiError) instead. A domain error
/// is still `Ok`; only malformed JSON or a payload that does not fit the
/// target shape returns `Err`.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<Envelope<T>, Error> {
    let raw: RawEnvelope = serde_json::from_str(json)?;
    dispatch(raw)
}

pub fn decode_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<Envelope<T>, Error> {
    let raw: RawEnvelope = serde_json::from_value(value)?;
    dispatch(raw)
}

fn dispatch<T: DeserializeOwned>(raw: RawEnvelope) -> Result<Envelope<T>, Error> {
    let RawEnvelope { kind, data } = raw;
    let outcome = match kind.parse::<EnvelopeKind>() {
        Ok(EnvelopeKind::Error) => Outcome::Error(serde_json::from_value(data)?),
        Ok(EnvelopeKind::Data) | Err(_) => Outcome::Data(serde_json::from_value(data)?),
    };
    tracing::debug!(
        kind = %kind,
        is_error = matches!(outcome, Outcome::Error(_)),
        "decoded envelope"
    );
    Ok(Envelope { kind, outcome })
}
