use contracts::usecases::u601_deep_research::{
    HealthResponse, ResearchRequest, ResearchResponse, HEALTH_PATH, RESEARCH_PATH,
};
use gloo_net::http::Request;

use super::state::{ResearchError, NO_SUMMARY_PLACEHOLDER};
use crate::shared::api_utils::api_url;

/// Send one research request and return the summary to display
pub async fn run_research(request: &ResearchRequest) -> Result<String, ResearchError> {
    log::info!("research request: {:?}", request.query);

    let response = Request::post(&api_url(RESEARCH_PATH))
        .json(request)?
        .send()
        .await?;

    ensure_success(response.status())?;

    let body = response.text().await?;
    summary_from_body(&body)
}

/// Probe `GET /api/health`
pub async fn check_health() -> Result<HealthResponse, String> {
    let response = Request::get(&api_url(HEALTH_PATH))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Health check failed: {}", response.status()));
    }

    response
        .json::<HealthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

fn ensure_success(status: u16) -> Result<(), ResearchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ResearchError::Status(status))
    }
}

fn summary_from_body(body: &str) -> Result<String, ResearchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ResearchError::Decode(e.to_string()))?;
    Ok(ResearchResponse::from_json(&value)
        .summary()
        .unwrap_or(NO_SUMMARY_PLACEHOLDER)
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_deep_research::state::RequestState;

    /// Drive a state through one request answered with `status`/`body`
    fn settle(status: u16, body: &str) -> RequestState {
        let mut state = RequestState::default();
        state.begin();
        let outcome = ensure_success(status).and_then(|_| summary_from_body(body));
        state.finish(outcome);
        state
    }

    #[test]
    fn test_summary_returned() {
        let state = settle(200, r#"{"final_summary":"Line1\nLine2"}"#);
        assert_eq!(state.result(), "Line1\nLine2");
    }

    #[test]
    fn test_missing_summary_uses_placeholder() {
        assert_eq!(settle(200, "{}").result(), "No summary available");
        assert_eq!(
            settle(201, r#"{"final_summary":""}"#).result(),
            "No summary available"
        );
    }

    #[test]
    fn test_other_fields_do_not_break_decoding() {
        for body in [
            r#"{"final_summary":"ok","sources_requested":5.0}"#,
            r#"{"final_summary":"ok","sources_requested":-1}"#,
            r#"{"final_summary":"ok","success":"yes","query":null}"#,
        ] {
            let state = settle(200, body);
            assert_eq!(state.result(), "ok", "body: {}", body);
            assert_eq!(state.error(), "");
        }
    }

    #[test]
    fn test_well_formed_body_without_string_summary_uses_placeholder() {
        for body in [r#""done""#, "[]", "null", "42", r#"{"final_summary":7}"#] {
            let state = settle(200, body);
            assert_eq!(state.result(), "No summary available", "body: {}", body);
            assert_eq!(state.error(), "");
        }
    }

    #[test]
    fn test_non_2xx_is_generic_error() {
        for status in [400, 404, 500, 302] {
            let state = settle(status, r#"{"error":"Query cannot be empty"}"#);
            assert_eq!(state.error(), "Failed to fetch research data");
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn test_invalid_json_surfaces_parser_message() {
        let state = settle(200, "<html>");
        assert!(!state.is_loading());
        assert!(!state.error().is_empty());
        assert_eq!(state.result(), "");
    }
}
