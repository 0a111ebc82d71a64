use coralchat_core::{WidgetConfig, WidgetError};
use coralchat_settings::WidgetSettings;
use reqwest::Client;
use tracing::debug;

use crate::wire::{ChatReply, ChatRequest};

/// Client for the remote widget API. Cheap to clone per request via the
/// shared `reqwest::Client`.
pub struct ApiClient {
    http: Client,
    base_url: String,
    tenant_id: String,
}

impl ApiClient {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_base_url.clone(),
            tenant_id: config.tenant_id.clone(),
        }
    }

    /// Fetch the tenant settings document. Called once per page load;
    /// failure leaves the widget on built-in defaults.
    pub async fn fetch_settings(&self) -> Result<WidgetSettings, WidgetError> {
        let url = format!("{}/widget/settings/public", self.base_url);
        debug!(%url, tenant_id = %self.tenant_id, "fetching widget settings");
        let response = self
            .http
            .get(&url)
            .query(&[("tenant_id", self.tenant_id.as_str())])
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::Api {
                status: status.as_u16(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))
    }

    /// Exchange one message. Any non-2xx status is one uniform failure;
    /// the caller surfaces it as a canned assistant message.
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, WidgetError> {
        let url = format!("{}/chat", self.base_url);
        debug!(%url, session_id = ?request.session_id, "sending chat message");
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::Api {
                status: status.as_u16(),
            });
        }
        response
            .json()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))
    }
}
