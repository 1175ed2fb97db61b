use contracts::usecases::u601_deep_research::HealthResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::usecases::u601_deep_research::api;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiStatus {
    Checking,
    Online(String),
    Offline,
}

impl ApiStatus {
    pub fn from_probe(probe: &Result<HealthResponse, String>) -> Self {
        match probe {
            Ok(health) if health.is_healthy() => ApiStatus::Online(health.version.clone()),
            _ => ApiStatus::Offline,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ApiStatus::Checking => "Checking API...".to_string(),
            ApiStatus::Online(version) if version.is_empty() => "API online".to_string(),
            ApiStatus::Online(version) => format!("API online v{}", version),
            ApiStatus::Offline => "API offline".to_string(),
        }
    }

    pub fn variant(&self) -> BadgeVariant {
        match self {
            ApiStatus::Checking => BadgeVariant::Neutral,
            ApiStatus::Online(_) => BadgeVariant::Success,
            ApiStatus::Offline => BadgeVariant::Error,
        }
    }
}

/// Header badge showing whether the research backend answers its health check.
/// Probed once on mount; purely informational.
#[component]
pub fn ApiStatusBadge() -> impl IntoView {
    let status = RwSignal::new(ApiStatus::Checking);

    spawn_local(async move {
        let probe = api::check_health().await;
        match &probe {
            Ok(health) => log::info!("API health: {} {}", health.status, health.version),
            Err(e) => log::warn!("API health check failed: {}", e),
        }
        status.set(ApiStatus::from_probe(&probe));
    });

    let variant = Signal::derive(move || status.with(ApiStatus::variant));

    view! {
        <Badge variant=variant>
            {move || status.with(ApiStatus::label)}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(status: &str, version: &str) -> HealthResponse {
        HealthResponse {
            status: status.to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_online_with_version() {
        let status = ApiStatus::from_probe(&Ok(health("healthy", "1.0.0")));
        assert_eq!(status.label(), "API online v1.0.0");
        assert_eq!(status.variant(), BadgeVariant::Success);
    }

    #[test]
    fn test_online_without_version() {
        assert_eq!(
            ApiStatus::from_probe(&Ok(health("healthy", ""))).label(),
            "API online"
        );
    }

    #[test]
    fn test_unhealthy_or_failed_is_offline() {
        assert_eq!(
            ApiStatus::from_probe(&Ok(health("degraded", "1.0.0"))),
            ApiStatus::Offline
        );
        assert_eq!(
            ApiStatus::from_probe(&Err("Health check failed: 502".to_string())),
            ApiStatus::Offline
        );
    }
}
