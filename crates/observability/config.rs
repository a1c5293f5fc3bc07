use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceContext {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ObservabilityConfig {
    pub(crate) service_context: ServiceContext,
}

impl ObservabilityConfig {
    pub(crate) fn from_env(component: &str) -> Self {
        Self::from_values(
            component,
            env_string("SERVICE_NAME"),
            env_string("STAGE"),
        )
    }

    fn from_values(
        component: &str,
        service_name: Option<String>,
        environment: Option<String>,
    ) -> Self {
        let component = component.trim().to_string();

        let service_name = service_name
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| component.clone());

        let environment = environment
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            service_context: ServiceContext {
                service_name,
                environment,
                component,
            },
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_name_defaults_to_component() {
        let config = ObservabilityConfig::from_values(" backend ", None, Some(String::new()));

        assert_eq!(
            config.service_context,
            ServiceContext {
                service_name: "backend".to_string(),
                environment: "unknown".to_string(),
                component: "backend".to_string(),
            }
        );
    }

    #[test]
    fn explicit_values_are_kept() {
        let config = ObservabilityConfig::from_values(
            "backend",
            Some("turisteando".to_string()),
            Some("production".to_string()),
        );

        assert_eq!(config.service_context.service_name, "turisteando");
        assert_eq!(config.service_context.environment, "production");
    }
}
