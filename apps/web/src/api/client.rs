//! HTTP API Client

use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// API client for backend communication
pub struct ApiClient {
    base_url: String,
}

/// Vectorize request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VectorizeBody<'a> {
    drawing_data_uri: &'a str,
    api_key: &'a str,
    session_id: &'a str,
}

/// `{svgData, error}` as returned by `/api/v1/vectorize`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorizeReply {
    #[serde(default)]
    pub svg_data: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        // Get base URL from window location or use default
        let base_url = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:9590".to_string());

        Self { base_url }
    }

    /// Make a POST request
    ///
    /// Bodies are decoded for every status; the vectorize endpoints answer
    /// 409 with the same shape as 200.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, path);

        Request::post(&url)
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(body).map_err(|e| e.to_string())?)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json::<T>()
            .await
            .map_err(|e| e.to_string())
    }

    /// Send a canvas snapshot for vectorization
    pub async fn vectorize(
        &self,
        drawing_data_uri: &str,
        api_key: &str,
        session_id: &str,
    ) -> Result<VectorizeReply, String> {
        self.post(
            "/api/v1/vectorize",
            &VectorizeBody {
                drawing_data_uri,
                api_key,
                session_id,
            },
        )
        .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
