use http::StatusCode;
use serde::Serialize;
use url::Url;

use crate::envelope::Envelope;
use crate::error::Error;
use crate::transport::{HttpResponse, Transport};

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
struct Route {
    pattern: String,
    content_type: String,
    body: String,
}

/// In-process stand-in for an HTTP server.
///
/// Routes are full-URL patterns where `*` matches any run of characters.
/// The first registered route that matches wins; anything else gets a 404
/// with an empty body.
#[derive(Debug, Clone, Default)]
pub struct MockServer {
    routes: Vec<Route>,
}

impl MockServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(
        &mut self,
        pattern: impl Into<String>,
        content_type: impl Into<String>,
        body: impl Into<String>,
    ) -> &mut Self {
        self.routes.push(Route {
            pattern: pattern.into(),
            content_type: content_type.into(),
            body: body.into(),
        });
        self
    }

    /// Serve `envelope` in its wire form as `application/json`.
    pub fn respond_envelope<T: Serialize>(
        &mut self,
        pattern: impl Into<String>,
        envelope: &Envelope<T>,
    ) -> Result<&mut Self, Error> {
        let body = serde_json::to_string(envelope)?;
        Ok(self.respond(pattern, JSON_CONTENT_TYPE, body))
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    fn find(&self, url: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| wildcard_match(&route.pattern, url))
    }
}

impl Transport for MockServer {
    fn get(&self, url: &Url) -> Result<HttpResponse, Error> {
        match self.find(url.as_str()) {
            Some(route) => {
                tracing::debug!(%url, pattern = %route.pattern, "mock route matched");
                Ok(HttpResponse::ok(&route.content_type, &route.body))
            }
            None => {
                tracing::warn!(%url, "no mock route matched");
                Ok(HttpResponse::empty(StatusCode::NOT_FOUND))
            }
        }
    }
}

/// Glob-style match where `*` stands for zero or more characters.
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let (p, t) = (pattern.as_bytes(), text.as_bytes());
    let (mut pi, mut ti) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while ti < t.len() {
        if pi < p.len() && p[pi] == b'*' {
            backtrack = Some((pi, ti));
            pi += 1;
        } else if pi < p.len() && p[pi] == t[ti] {
            pi += 1;
            ti += 1;
        } else if let Some((star_pi, star_ti)) = backtrack {
            pi = star_pi + 1;
            ti = star_ti + 1;
            backtrack = Some((star_pi, star_ti + 1));
        } else {
            return false;
        }
    }
    p[pi..].iter().all(|&b| b == b'*')
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::envelope::ApiError;
    use crate::transport::{fetch_json, get_data};
    use crate::types::Customer;

    #[test]
    fn wildcard_cases() {
        let cases = [
            ("http://h/customer/*", "http://h/customer/157", true),
            ("http://h/customer/*", "http://h/customer/", true),
            ("http://h/customer/*", "http://h/customers", false),
            ("http://h/customers", "http://h/customers", true),
            ("http://h/customers", "http://h/customers/1", false),
            ("http://h/*/1", "http://h/a/b/1", true),
            ("http://h/*/1", "http://h/a/b/2", false),
            ("*", "", true),
            ("", "", true),
            ("", "x", false),
            ("a**b", "ab", true),
            ("a*b*c", "aXbYc", true),
            ("a*b*c", "aXbY", false),
        ];
        for (pattern, text, expected) in cases {
            assert_eq!(
                wildcard_match(pattern, text),
                expected,
                "mismatch for {pattern} vs {text}"
            );
        }
    }

    #[test]
    fn first_matching_route_wins() {
        let mut server = MockServer::new();
        server
            .respond("http://h/a/*", JSON_CONTENT_TYPE, "first")
            .respond("http://h/a/1", JSON_CONTENT_TYPE, "second");
        assert_eq!(server.route_count(), 2);
        assert_eq!(fetch_json(&server, "http://h/a/1").unwrap(), "first");
    }

    #[test]
    fn unmatched_route_is_not_found() {
        let server = MockServer::new();
        let response = server.get(&Url::parse("http://h/nothing").unwrap()).unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.body.is_empty());
        assert!(matches!(
            fetch_json(&server, "http://h/nothing"),
            Err(Error::Status { status, .. }) if status == StatusCode::NOT_FOUND
        ));
    }

    #[test]
    fn matches_against_normalized_url() {
        let mut server = MockServer::new();
        server.respond("http://h/", "text/plain", "root");
        assert_eq!(fetch_json(&server, "HTTP://H").unwrap(), "root");
    }

    #[test]
    fn serves_envelopes_as_json() {
        let mut server = MockServer::new();
        server
            .respond_envelope("http://h/customer/*", &Envelope::data(Customer::new(1, "Mike Ross")))
            .unwrap()
            .respond_envelope(
                "http://h/customers",
                &Envelope::<Customer>::error(ApiError::new(99, "Error data type")),
            )
            .unwrap();

        let response = server
            .get(&Url::parse("http://h/customer/157").unwrap())
            .unwrap();
        assert_eq!(response.content_type.as_deref(), Some(JSON_CONTENT_TYPE));

        let ok: Envelope<Customer> = get_data(&server, "http://h/customer/157").unwrap();
        assert_eq!(ok.data_ref(), Some(&Customer::new(1, "Mike Ross")));

        let err: Envelope<Customer> = get_data(&server, "http://h/customers").unwrap();
        assert_eq!(err.error_ref(), Some(&ApiError::new(99, "Error data type")));
    }
}
