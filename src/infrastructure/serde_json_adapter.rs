use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs;

/// Request body after schema validation. `null` endpoints stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CalculateRequestDto {
    pub edges: Vec<(Option<String>, Option<String>)>,
}

impl CalculateRequestDto {
    /// Edge pairs as graph labels; a missing endpoint becomes the empty label.
    pub fn label_pairs(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.edges.iter().map(|(from, to)| {
            (
                from.clone().unwrap_or_default(),
                to.clone().unwrap_or_default(),
            )
        })
    }
}

/// Response envelope, tagged by `operation`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "operation")]
pub enum CalculateResponse {
    Complete { path: [String; 2] },
    ClientError { error: ErrorBodyDto },
    ServerError { error: ErrorBodyDto },
}

impl CalculateResponse {
    pub fn operation(&self) -> &'static str {
        match self {
            CalculateResponse::Complete { .. } => "Complete",
            CalculateResponse::ClientError { .. } => "ClientError",
            CalculateResponse::ServerError { .. } => "ServerError",
        }
    }

    /// HTTP-style status for whichever transport renders the envelope.
    pub fn status_code(&self) -> u16 {
        match self {
            CalculateResponse::Complete { .. } => 200,
            CalculateResponse::ClientError { .. } => 400,
            CalculateResponse::ServerError { .. } => 500,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, CalculateResponse::Complete { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBodyDto {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebugDto {
    pub heads: Vec<String>,
    pub tails: Vec<String>,
    pub graph: String,
}

pub async fn read_payload_file(path: &str) -> Result<Value> {
    let raw = fs::read_to_string(path).await?;
    let payload: Value = serde_json::from_str(&raw)?;
    Ok(payload)
}

pub async fn write_response_file(path: &str, response: &CalculateResponse) -> Result<()> {
    let pretty = serde_json::to_string_pretty(response)?;
    fs::write(path, pretty).await?;
    Ok(())
}
