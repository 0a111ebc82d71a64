/// Caller-supplied widget configuration, fixed at init.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Base URL of the chat API, without a trailing slash.
    pub api_base_url: String,
    /// Tenant the widget belongs to; namespaces storage and API calls.
    pub tenant_id: String,
}

impl WidgetConfig {
    pub fn new(api_base_url: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        let api_base_url: String = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            tenant_id: tenant_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = WidgetConfig::new("https://api.example.com/", "t1");
        assert_eq!(config.api_base_url, "https://api.example.com");
    }
}
