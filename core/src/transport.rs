//! Executing requests, and the gateway the screens talk to.
//!
//! # Design
//! `Transport` is the single I/O seam. `UreqTransport` performs blocking
//! HTTP with status codes returned as data, so `ArticleClient::parse_*`
//! stays in charge of interpreting them. Tests substitute a fake that
//! records requests and replays canned responses.

use tracing::{debug, warn};
use ureq::typestate::{WithBody, WithoutBody};
use ureq::{Agent, RequestBuilder};

use crate::client::ArticleClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Article, ArticleId, ArticleInput};

/// Executes one `HttpRequest` and returns the raw response.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a ureq agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut response = match (method, body) {
            (HttpMethod::Get, _) => send_empty(self.agent.get(&url), &headers),
            (HttpMethod::Delete, _) => send_empty(self.agent.delete(&url), &headers),
            (HttpMethod::Post, body) => send_body(self.agent.post(&url), &headers, body),
            (HttpMethod::Put, body) => send_body(self.agent.put(&url), &headers, body),
        }?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        Ok(HttpResponse { status, body })
    }
}

fn send_empty(
    mut builder: RequestBuilder<WithoutBody>,
    headers: &[(String, String)],
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder.call()
}

fn send_body(
    mut builder: RequestBuilder<WithBody>,
    headers: &[(String, String)],
    body: Option<String>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}

/// The four operations the screens consume, over an explicit transport.
///
/// Constructed once by the host and passed by reference into every
/// controller; nothing here is global.
#[derive(Debug, Clone)]
pub struct ArticleGateway<T> {
    client: ArticleClient,
    transport: T,
}

impl ArticleGateway<UreqTransport> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(ArticleClient::new(&config.base_url), UreqTransport::new())
    }
}

impl<T: Transport> ArticleGateway<T> {
    pub fn new(client: ArticleClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ArticleClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list(&self) -> Result<Vec<Article>, ApiError> {
        let req = self.client.build_list_articles();
        let response = self.send(req)?;
        self.client.parse_list_articles(response)
    }

    pub fn create(&self, input: &ArticleInput) -> Result<(), ApiError> {
        let req = self.client.build_create_article(input)?;
        let response = self.send(req)?;
        self.client.parse_create_article(response)
    }

    pub fn update(&self, id: ArticleId, input: &ArticleInput) -> Result<(), ApiError> {
        let req = self.client.build_update_article(id, input)?;
        let response = self.send(req)?;
        self.client.parse_update_article(response)
    }

    pub fn delete(&self, id: ArticleId) -> Result<(), ApiError> {
        let req = self.client.build_delete_article(id);
        let response = self.send(req)?;
        self.client.parse_delete_article(response)
    }

    fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = req.method.as_str();
        let url = req.url.clone();
        debug!(method, url = %url, "sending request");
        match self.transport.execute(req) {
            Ok(response) => {
                debug!(method, url = %url, status = response.status, "received response");
                Ok(response)
            }
            Err(err) => {
                warn!(method, url = %url, error = %err, "request failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct Canned {
        response: HttpResponse,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Transport for Canned {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request);
            Ok(self.response.clone())
        }
    }

    fn gateway(status: u16, body: &str) -> ArticleGateway<Canned> {
        ArticleGateway::new(
            ArticleClient::new("http://api.test"),
            Canned {
                response: HttpResponse::new(status, body),
                seen: RefCell::new(Vec::new()),
            },
        )
    }

    #[test]
    fn list_goes_through_transport_and_parses() {
        let gw = gateway(200, r#"{"data":[{"id":3,"titre":"Abc","description":"0123456789"}]}"#);
        let articles = gw.list().unwrap();
        assert_eq!(articles[0].id, 3);
        let seen = gw.transport().seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url, "http://api.test/posts");
    }

    #[test]
    fn delete_surfaces_status_errors() {
        let gw = gateway(500, "nope");
        assert!(matches!(gw.delete(1), Err(ApiError::Status { status: 500, .. })));
    }

    #[test]
    fn gateway_accepts_borrowed_transport() {
        let canned = Canned {
            response: HttpResponse::new(204, ""),
            seen: RefCell::new(Vec::new()),
        };
        let gw = ArticleGateway::new(ArticleClient::new("http://api.test"), &canned);
        gw.delete(2).unwrap();
        assert_eq!(canned.seen.borrow()[0].url, "http://api.test/post/2");
    }
}
