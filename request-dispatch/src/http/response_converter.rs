use crate::error::Result;
use crate::types::{ResponseBody, ResponseEnvelope};
use reqwest::Response;
use std::collections::HashMap;

/// Converts a reqwest response into a `ResponseEnvelope`
#[derive(Clone)]
pub struct ResponseConverterImpl;

impl ResponseConverterImpl {
    pub fn new() -> Self {
        Self
    }

    pub async fn convert_response(&self, response: Response) -> Result<ResponseEnvelope> {
        let status_code = response.status().as_u16();

        // Header names from reqwest are already lower-case
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.to_string(), value_str.to_string());
            }
        }

        let bytes = response.bytes().await?;
        let body = ResponseBody::from_slice(&bytes);

        Ok(ResponseEnvelope {
            status_code,
            headers,
            body,
        })
    }
}

impl Default for ResponseConverterImpl {
    fn default() -> Self {
        Self::new()
    }
}
