use thiserror::Error;

/// Shown when the backend answers without a usable `final_summary`
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary available";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResearchError {
    /// Non-2xx response. The body is not inspected.
    #[error("Failed to fetch research data")]
    Status(u16),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ResearchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => ResearchError::Transport(js.message),
            gloo_net::Error::SerdeError(e) => ResearchError::Decode(e.to_string()),
            other => ResearchError::Transport(other.to_string()),
        }
    }
}

/// Lifecycle of the single research request owned by the shell.
///
/// Exactly one variant is active, so the loading indicator can never show
/// together with a summary or an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(String),
}

impl RequestState {
    /// Enter `Loading`, dropping any previous summary or error.
    pub fn begin(&mut self) {
        log::debug!("research: {:?} -> Loading", self.kind());
        *self = RequestState::Loading;
    }

    /// Settle a request. Ignored unless a request is in flight.
    pub fn finish(&mut self, outcome: Result<String, ResearchError>) {
        if !self.is_loading() {
            log::warn!("research: outcome arrived in {:?}, ignored", self.kind());
            return;
        }
        *self = match outcome {
            Ok(summary) => RequestState::Success(summary),
            Err(e) => RequestState::Error(e.to_string()),
        };
        log::debug!("research: Loading -> {:?}", self.kind());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Error message, empty unless the last request failed
    pub fn error(&self) -> &str {
        match self {
            RequestState::Error(message) => message,
            _ => "",
        }
    }

    /// Summary text, empty unless the last request succeeded
    pub fn result(&self) -> &str {
        match self {
            RequestState::Success(summary) => summary,
            _ => "",
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            RequestState::Idle => "Idle",
            RequestState::Loading => "Loading",
            RequestState::Error(_) => "Error",
            RequestState::Success(_) => "Success",
        }
    }
}
