#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod config;
pub mod demo;
pub mod envelope;
pub mod error;
pub mod observability;
pub mod transport;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{Config, LogFormat};
pub use envelope::decode::{decode, decode_value};
pub use envelope::{ApiError, Envelope, EnvelopeKind, Outcome};
pub use error::Error;
pub use transport::mock::MockServer;
pub use transport::{HttpResponse, Transport, fetch_json, get_data};
pub use types::{Customer, Payload, PayloadKind, Supplier, decode_as};
