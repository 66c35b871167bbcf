use std::env;

#[derive(Debug, Clone)]
pub(crate) struct ObservabilityConfig {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

impl ObservabilityConfig {
    pub(crate) fn from_env(component: &str) -> Self {
        Self::from_values(component, env_string("SERVICE_NAME"), env_string("STAGE"))
    }

    fn from_values(component: &str, service_name: Option<String>, stage: Option<String>) -> Self {
        let component = component.trim().to_string();

        let service_name = service_name
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| component.clone());

        let environment = stage
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            service_name,
            environment,
            component,
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok()
}
