pub mod decode;

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::Error;

/// Discriminator values understood by the decoder.
///
/// Only `"error"` changes how the payload is read. Any other `type` string
/// (including ones not listed here) is decoded as a data envelope.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum EnvelopeKind {
    Data,
    Error,
}

/// Error body carried by an `"error"` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ApiError {
    id: i64,
    description: String,
}

impl ApiError {
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error code {} - {}", self.id, self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Data(T),
    Error(ApiError),
}

/// A decoded `{ type, data }` document.
///
/// Holds the `type` string verbatim and exactly one of a payload or an
/// [`ApiError`]. Serializing an envelope produces the wire form again, with
/// the error body written back under `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<T> {
    kind: String,
    outcome: Outcome<T>,
}

impl<T> Envelope<T> {
    pub fn data(payload: T) -> Self {
        Self {
            kind: EnvelopeKind::Data.to_string(),
            outcome: Outcome::Data(payload),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            kind: EnvelopeKind::Error.to_string(),
            outcome: Outcome::Error(error),
        }
    }

    /// Data envelope with an arbitrary discriminator, e.g. `"send"`.
    ///
    /// `"error"` is refused: it would serialize as an error envelope and no
    /// longer decode back to this payload. Use [`Envelope::error`] instead.
    pub fn with_kind(kind: impl Into<String>, payload: T) -> Result<Self, Error> {
        let kind = kind.into();
        if matches!(kind.parse::<EnvelopeKind>(), Ok(EnvelopeKind::Error)) {
            return Err(Error::InvalidKind { kind });
        }
        Ok(Self {
            kind,
            outcome: Outcome::Data(payload),
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    pub fn data_ref(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Data(payload) => Some(payload),
            Outcome::Error(_) => None,
        }
    }

    pub fn error_ref(&self) -> Option<&ApiError> {
        match &self.outcome {
            Outcome::Data(_) => None,
            Outcome::Error(err) => Some(err),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }

    /// Human-readable error line, or an empty string for data envelopes.
    pub fn error_message(&self) -> String {
        match &self.outcome {
            Outcome::Error(err) => format!("An error occurred. {err}"),
            Outcome::Data(_) => String::new(),
        }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self.outcome {
            Outcome::Data(payload) => Ok(payload),
            Outcome::Error(err) => Err(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        let outcome = match self.outcome {
            Outcome::Data(payload) => Outcome::Data(f(payload)),
            Outcome::Error(err) => Outcome::Error(err),
        };
        Envelope {
            kind: self.kind,
            outcome,
        }
    }
}

#[derive(Serialize)]
struct WireEnvelope<'a, T> {
    #[serde(rename = "type")]
    kind: &'a str,
    data: WireData<'a, T>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum WireData<'a, T> {
    Data(&'a T),
    Error(&'a ApiError),
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = match &self.outcome {
            Outcome::Data(payload) => WireData::Data(payload),
            Outcome::Error(err) => WireData::Error(err),
        };
        WireEnvelope {
            kind: &self.kind,
            data,
        }
        .serialize(serializer)
    }
}
