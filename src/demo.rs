//! Fixed demonstration sequence against the mock server.

use std::io::{self, Write};

use url::Url;

use crate::envelope::decode::decode;
use crate::envelope::{ApiError, Envelope, Outcome};
use crate::error::Error;
use crate::transport::mock::MockServer;
use crate::transport::{Transport, get_data};
use crate::types::{Customer, Supplier};

pub const DEFAULT_BASE_URL: &str = "http://contoso.come";
pub const VERSION: &str = "v 2.15.144";

/// Envelope with an unrecognised discriminator, decoded without a server.
pub const SEND_LITERAL: &str = r#"{"type":"send", "data": {"id":1, "name": "John Ross"}}"#;

pub fn endpoint(base: &Url, path: &str) -> String {
    format!("{}/{path}", base.as_str().trim_end_matches('/'))
}

pub fn mock_server(base: &Url) -> Result<MockServer, Error> {
    let mut server = MockServer::new();
    server
        .respond_envelope(
            endpoint(base, "customer/*"),
            &Envelope::data(Customer::new(1, "Mike Ross")),
        )?
        .respond_envelope(
            endpoint(base, "supplier/*"),
            &Envelope::data(Supplier::new(1, "Microsoft")),
        )?
        .respond_envelope(
            endpoint(base, "customers"),
            &Envelope::<Customer>::error(ApiError::new(99, "Error data type")),
        )?
        .respond_envelope(endpoint(base, "version/"), &Envelope::data(VERSION))?;
    Ok(server)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoSummary {
    pub ok: usize,
    pub domain_errors: usize,
    pub failures: usize,
}

impl DemoSummary {
    fn report<T>(
        &mut self,
        out: &mut impl Write,
        heading: &str,
        result: Result<Envelope<T>, Error>,
        describe: impl FnOnce(&T) -> String,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{heading}")?;
        match result {
            Ok(envelope) => match envelope.outcome() {
                Outcome::Data(payload) => {
                    self.ok += 1;
                    writeln!(out, "The response is OK. {}", describe(payload))
                }
                Outcome::Error(_) => {
                    self.domain_errors += 1;
                    writeln!(out, "ERROR! {}", envelope.error_message())
                }
            },
            Err(err) => {
                self.failures += 1;
                tracing::warn!(error = %err, heading, "demo call failed");
                writeln!(out, "ERROR! {err}")
            }
        }
    }
}

/// Run every demo call in order, writing the transcript to `out`.
///
/// A failed call is reported and the sequence moves on.
pub fn run(transport: &dyn Transport, base: &Url, out: &mut impl Write) -> io::Result<DemoSummary> {
    let mut summary = DemoSummary::default();

    summary.report(
        out,
        "Getting customer data...",
        get_data::<Customer>(transport, &endpoint(base, "customer/157")),
        |c| format!("Customer name is {}", c.name),
    )?;

    summary.report(
        out,
        "Getting customer data with error...",
        get_data::<Customer>(transport, &endpoint(base, "customers")),
        |c| format!("Customer name is {}", c.name),
    )?;

    summary.report(
        out,
        "Getting supplier data...",
        get_data::<Supplier>(transport, &endpoint(base, "supplier/1885")),
        |s| format!("Supplier company is {}", s.company),
    )?;

    summary.report(
        out,
        "Getting version string data...",
        get_data::<String>(transport, &endpoint(base, "version/")),
        |v| format!("The version is {v}"),
    )?;

    summary.report(
        out,
        "Getting supplier data (but using customer endpoint)...",
        get_data::<Supplier>(transport, &endpoint(base, "customer/76")),
        |s| format!("Supplier company is {}", s.company),
    )?;

    summary.report(
        out,
        "Getting customer data from an unknown endpoint...",
        get_data::<Customer>(transport, &endpoint(base, "orders/1")),
        |c| format!("Customer name is {}", c.name),
    )?;

    summary.report(
        out,
        "Decoding a literal envelope with type \"send\"...",
        decode::<Customer>(SEND_LITERAL),
        |c| format!("Customer name is {}", c.name),
    )?;

    Ok(summary)
}
