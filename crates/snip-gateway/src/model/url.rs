use serde::{Deserialize, Serialize};

/// JSON envelope accepted by `POST /api/shorten`.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

/// JSON envelope returned by `POST /api/shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub result: String,
}
