use crate::config::DispatchConfig;
use crate::error::Result;
use crate::http::{RequestBuilderImpl, ResponseConverterImpl};
use crate::traits::{OutgoingRequest, Transport};
use crate::types::{ResponseEnvelope, TransportFailure};
use reqwest::Client;
use std::time::Duration;

/// Transport backed by a shared reqwest client
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl ReqwestTransport {
    /// Create a transport using the timeout and redirect settings of `config`
    pub fn new(config: &DispatchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::default()
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            request_builder: RequestBuilderImpl::new(client.clone()),
            response_converter: ResponseConverterImpl::new(),
            client,
        }
    }
}

impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: OutgoingRequest,
    ) -> std::result::Result<ResponseEnvelope, TransportFailure> {
        let built = self
            .request_builder
            .build_request(&request)
            .map_err(|e| TransportFailure::new(e.to_string()))?;

        let response = self
            .client
            .execute(built)
            .await
            .map_err(|e| TransportFailure::new(e.to_string()))?;

        self.response_converter
            .convert_response(response)
            .await
            .map_err(|e| TransportFailure::new(e.to_string()))
    }
}
