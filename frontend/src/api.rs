use common::{AnalysisResult, TeamQuery};

/// The external analysis service. All statistics work happens there, this
/// application only submits queries and renders the response.
pub const ANALYZE_ENDPOINT: &str = "https://team-predictor-ipl.onrender.com/analyze-teams";

/// The one failure class the UI handles: the request did not produce a
/// usable response. Logged to the console and otherwise swallowed.
#[derive(Debug)]
pub enum RequestError {
    Encode(serde_json::Error),
    Send(reqwasm::Error),
    Status(u16),
    Body(reqwasm::Error),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "encoding request body: {}", err),
            Self::Send(err) => write!(f, "sending request: {}", err),
            Self::Status(code) => write!(f, "server responded with status {}", code),
            Self::Body(err) => write!(f, "reading response body: {}", err),
        }
    }
}

impl std::error::Error for RequestError {}

/// Submits the two team names and parses the ranked player lists out of
/// the response.
pub async fn analyze_teams(query: &TeamQuery) -> Result<AnalysisResult, RequestError> {
    let body = serde_json::to_string(query).map_err(RequestError::Encode)?;

    let resp = reqwasm::http::Request::post(ANALYZE_ENDPOINT)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(RequestError::Send)?;

    if !(200..300).contains(&resp.status()) {
        return Err(RequestError::Status(resp.status()));
    }

    resp.json().await.map_err(RequestError::Body)
}
