// src/status_panel.rs

use chrono::{DateTime, Utc};
use log::debug;

use crate::errors::WstailResult;
use crate::swap;

/// Server status text shown in the sidebar, refreshed on demand over HTTP.
#[derive(Debug, Default)]
pub struct StatusPanel {
    pub content: String,
    pub last_refresh: Option<DateTime<Utc>>,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches `url` and swaps the panel content per the swap rule: an
    /// empty body leaves the panel untouched unless the status is
    /// 204 No Content, which clears it.
    pub async fn refresh(&mut self, url: &str) -> WstailResult<bool> {
        let response = reqwest::get(url).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        let swapped = swap::apply_swap(&mut self.content, status, &body);
        debug!("status refresh: {} (swapped: {})", status, swapped);

        if swapped {
            self.last_refresh = Some(Utc::now());
        }

        Ok(swapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_refresh_replaces_panel_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("2 builds running"))
            .mount(&server)
            .await;

        let mut panel = StatusPanel::new();
        let swapped = panel
            .refresh(&format!("{}/status/", server.uri()))
            .await
            .unwrap();

        assert!(swapped);
        assert_eq!(panel.content, "2 builds running");
        assert!(panel.last_refresh.is_some());
    }

    #[tokio::test]
    async fn test_refresh_ignores_empty_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let mut panel = StatusPanel::new();
        panel.content = "previous status".to_string();
        let swapped = panel
            .refresh(&format!("{}/status/", server.uri()))
            .await
            .unwrap();

        assert!(!swapped);
        assert_eq!(panel.content, "previous status");
        assert!(panel.last_refresh.is_none());
    }

    #[tokio::test]
    async fn test_refresh_forces_swap_on_204() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let mut panel = StatusPanel::new();
        panel.content = "previous status".to_string();
        let swapped = panel
            .refresh(&format!("{}/status/", server.uri()))
            .await
            .unwrap();

        assert!(swapped);
        assert_eq!(panel.content, "");
    }

    #[tokio::test]
    async fn test_refresh_error_leaves_panel_untouched() {
        let mut panel = StatusPanel::new();
        panel.content = "previous status".to_string();

        // Nothing listening on this port.
        let result = panel.refresh("http://127.0.0.1:1/status/").await;

        assert!(result.is_err());
        assert_eq!(panel.content, "previous status");
    }
}
