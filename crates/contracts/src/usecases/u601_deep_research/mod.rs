pub mod health;
pub mod request;
pub mod response;

pub use health::HealthResponse;
pub use request::ResearchRequest;
pub use response::ResearchResponse;

use crate::usecases::common::UseCaseMetadata;

/// Endpoint принимающий [`ResearchRequest`]
pub const RESEARCH_PATH: &str = "/api/research";

/// Endpoint проверки доступности backend
pub const HEALTH_PATH: &str = "/api/health";

pub struct DeepResearch;

impl UseCaseMetadata for DeepResearch {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "deep_research"
    }

    fn display_name() -> &'static str {
        "Deep Research Agent"
    }

    fn description() -> &'static str {
        "AI-powered research with social media and web data aggregation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(DeepResearch::full_name(), "u601_deep_research");
    }
}
