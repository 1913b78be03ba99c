pub mod mock;

use http::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::envelope::Envelope;
use crate::envelope::decode::decode;
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some(content_type.into()),
            body: body.into(),
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: String::new(),
        }
    }
}

/// Something that can answer an HTTP GET.
///
/// Implementations report the status they got; turning a non-success status
/// into an error is left to [`fetch_json`].
pub trait Transport: Sync {
    fn get(&self, url: &Url) -> Result<HttpResponse, Error>;
}

pub fn parse_url(url: &str) -> Result<Url, Error> {
    Url::parse(url).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// GET `url` and return the body, failing on any non-2xx status.
pub fn fetch_json(transport: &dyn Transport, url: &str) -> Result<String, Error> {
    let url = parse_url(url)?;
    let response = transport.get(&url)?;
    if !response.status.is_success() {
        tracing::warn!(%url, status = %response.status, "request failed");
        return Err(Error::Status {
            url: url.into(),
            status: response.status,
        });
    }
    tracing::debug!(%url, bytes = response.body.len(), "fetched body");
    Ok(response.body)
}

/// [`fetch_json`] followed by [`decode`].
pub fn get_data<T: DeserializeOwned>(
    transport: &dyn Transport,
    url: &str,
) -> Result<Envelope<T>, Error> {
    let body = fetch_json(transport, url)?;
    decode(&body)
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]
mod tests {
    use super::*;
    use crate::types::Customer;

    struct FixedTransport {
        status: StatusCode,
        body: &'static str,
    }

    impl Transport for FixedTransport {
        fn get(&self, _url: &Url) -> Result<HttpResponse, Error> {
            Ok(HttpResponse {
                status: self.status,
                content_type: Some("application/json".to_string()),
                body: self.body.to_string(),
            })
        }
    }

    #[test]
    fn success_status_returns_body() {
        let transport = FixedTransport {
            status: StatusCode::OK,
            body: r#"{"type":"data","data":"v1"}"#,
        };
        assert_eq!(
            fetch_json(&transport, "http://example.test/version/").unwrap(),
            r#"{"type":"data","data":"v1"}"#
        );
    }

    #[test]
    fn non_success_status_is_fatal() {
        for status in [
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::MOVED_PERMANENTLY,
        ] {
            let transport = FixedTransport {
                status,
                body: r#"{"type":"data","data":"ignored"}"#,
            };
            let err = get_data::<String>(&transport, "http://example.test/x").unwrap_err();
            let Error::Status { url, status: got } = &err else {
                panic!("expected Status error, got {err:?}");
            };
            assert_eq!(*got, status);
            assert_eq!(url, "http://example.test/x");
        }
    }

    #[test]
    fn invalid_url_is_rejected_before_the_request() {
        let transport = FixedTransport {
            status: StatusCode::OK,
            body: "{}",
        };
        assert!(matches!(
            fetch_json(&transport, "not a url"),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[test]
    fn get_data_decodes_body() {
        let transport = FixedTransport {
            status: StatusCode::OK,
            body: r#"{"type":"data","data":{"customerId":1,"name":"Mike Ross"}}"#,
        };
        let env: Envelope<Customer> = get_data(&transport, "http://example.test/customer/1").unwrap();
        assert_eq!(env.data_ref(), Some(&Customer::new(1, "Mike Ross")));
    }

    #[test]
    fn get_data_propagates_malformed_body() {
        let transport = FixedTransport {
            status: StatusCode::OK,
            body: "<html>oops</html>",
        };
        assert!(matches!(
            get_data::<Customer>(&transport, "http://example.test/customer/1"),
            Err(Error::Json(_))
        ));
    }
}
