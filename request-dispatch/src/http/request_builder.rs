use crate::error::{DispatchError, Result};
use crate::traits::OutgoingRequest;
use reqwest::{Client, Method, Request};
use serde_json::Value;

/// Turns an `OutgoingRequest` into a reqwest request
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
}

impl RequestBuilderImpl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Methods whose payload travels in the query string
    fn payload_in_query(method: &Method) -> bool {
        *method == Method::GET || *method == Method::HEAD || *method == Method::DELETE
    }

    /// Flatten an object payload into query pairs. Strings go in verbatim,
    /// other values as their JSON text; nulls are dropped.
    fn query_pairs(payload: &Value) -> Vec<(String, String)> {
        let Value::Object(map) = payload else {
            return Vec::new();
        };

        map.iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| {
                let value = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), value)
            })
            .collect()
    }

    pub fn build_request(&self, request: &OutgoingRequest) -> Result<Request> {
        let method = Method::from_bytes(request.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| DispatchError::invalid_method(&request.method))?;
        let url = url::Url::parse(&request.url)?;

        let mut builder = self.client.request(method.clone(), url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(payload) = &request.payload {
            if Self::payload_in_query(&method) {
                builder = builder.query(&Self::query_pairs(payload));
            } else {
                builder = builder.body(serde_json::to_vec(payload)?);
            }
        }

        builder.build().map_err(Into::into)
    }
}
