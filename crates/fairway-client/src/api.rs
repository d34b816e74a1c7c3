//! HTTP client for the Fairway Concierge backend
//!
//! One async method per backend operation. The client keeps a cookie jar so
//! the admin session established by the token exchange rides along on every
//! privileged call, matching how the backend authenticates operators.

use fairway_core::config::BackendConfig;
use fairway_core::types::{
    AdminUser, BlogPost, ContactInquiry, ContactRequest, PartnerOffer, Review, ReviewStats,
    ReviewSubmission, SubscribeRequest, Subscriber,
};
use fairway_core::{Error, Partner, PartnerType, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Error payload shape the backend uses for rejections
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// API client for the Fairway Concierge backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_base: String,
}

impl ApiClient {
    /// Create a new API client against an API base like `http://host/api`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_base: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_base, Duration::from_secs(30))
    }

    /// Create a new API client with an explicit request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(api_base: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the backend section of the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::with_timeout(
            config.api_base(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// The API base URL this client talks to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    /// Map an HTTP error status to an API error, pulling the backend's
    /// `detail` message out of the body when it carries one
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| format!("request rejected with status {status}"));

        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Self::check(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| Error::Transport(format!("failed to parse response: {e}")))
    }

    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Self::check(response).await
    }

    // ---- Partner listings (content manager) ----

    /// List all partners of one type
    pub async fn list_partners(&self, partner_type: PartnerType) -> Result<Vec<Partner>> {
        self.get_json(partner_type.collection_path()).await
    }

    /// Create a new partner listing
    pub async fn create_partner(
        &self,
        partner_type: PartnerType,
        partner: &Partner,
    ) -> Result<()> {
        self.post_json(partner_type.collection_path(), partner)
            .await?;
        Ok(())
    }

    /// Update an existing partner listing
    pub async fn update_partner(
        &self,
        partner_type: PartnerType,
        partner: &Partner,
    ) -> Result<()> {
        let path = format!(
            "{}/{}",
            partner_type.collection_path(),
            urlencoding::encode(&partner.id)
        );
        let response = self
            .client
            .put(self.url(&path))
            .json(partner)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }

    /// Delete a partner listing
    pub async fn delete_partner(&self, partner_type: PartnerType, id: &str) -> Result<()> {
        let path = format!(
            "{}/{}",
            partner_type.collection_path(),
            urlencoding::encode(id)
        );
        let response = self
            .client
            .delete(self.url(&path))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }

    // ---- Public site data ----

    /// Partner offers shown on the public site, optionally filtered by category
    pub async fn partner_offers(&self, offer_type: Option<&str>) -> Result<Vec<PartnerOffer>> {
        let path = offer_type.map_or_else(
            || "/partner-offers".to_string(),
            |t| format!("/partner-offers?type={}", urlencoding::encode(t)),
        );
        self.get_json(&path).await
    }

    /// Blog posts, optionally filtered by category
    pub async fn list_blog_posts(&self, category: Option<&str>) -> Result<Vec<BlogPost>> {
        let path = category.map_or_else(
            || "/blog".to_string(),
            |c| format!("/blog?category={}", urlencoding::encode(c)),
        );
        self.get_json(&path).await
    }

    /// A single blog post by slug
    pub async fn blog_post(&self, slug: &str) -> Result<BlogPost> {
        let path = format!("/blog/{}", urlencoding::encode(slug));
        match self.get_json(&path).await {
            Err(Error::Api { status: 404, .. }) => Err(Error::NotFound {
                resource: format!("blog post {slug}"),
            }),
            other => other,
        }
    }

    /// Approved customer reviews for public display
    pub async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.get_json("/reviews").await
    }

    /// Aggregate rating statistics over the approved reviews
    ///
    /// Backs the public rating widgets; the backend precomputes the average
    /// and per-star distribution.
    pub async fn review_stats(&self) -> Result<ReviewStats> {
        self.get_json("/reviews/stats").await
    }

    /// Submit a new review through the public form
    ///
    /// The review stays pending until an operator approves it.
    pub async fn submit_review(&self, submission: &ReviewSubmission) -> Result<()> {
        self.post_json("/reviews/submit", submission).await?;
        Ok(())
    }

    /// Submit the public contact form
    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<()> {
        self.post_json("/contact", request).await?;
        Ok(())
    }

    /// Sign up to the newsletter
    pub async fn subscribe(&self, request: &SubscribeRequest) -> Result<()> {
        self.post_json("/newsletter", request).await?;
        Ok(())
    }

    // ---- Admin surface ----

    /// Contact inquiries (admin)
    pub async fn list_contacts(&self) -> Result<Vec<ContactInquiry>> {
        self.get_json("/contact").await
    }

    /// Delete a contact inquiry (admin)
    pub async fn delete_contact(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/contact/{}", urlencoding::encode(id))))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }

    /// Newsletter subscribers (admin)
    pub async fn list_subscribers(&self) -> Result<Vec<Subscriber>> {
        self.get_json("/newsletter").await
    }

    /// Delete a newsletter subscriber (admin)
    pub async fn delete_subscriber(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/newsletter/{}", urlencoding::encode(id))))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }

    /// Reviews awaiting moderation (admin)
    pub async fn pending_reviews(&self) -> Result<Vec<Review>> {
        self.get_json("/reviews/pending").await
    }

    /// Approve a pending review for public display (admin)
    pub async fn approve_review(&self, id: &str) -> Result<()> {
        let path = format!("/reviews/{}/approve", urlencoding::encode(id));
        self.post_json(&path, &json!({})).await?;
        Ok(())
    }

    /// Reject a pending review (admin)
    pub async fn reject_review(&self, id: &str) -> Result<()> {
        let path = format!("/reviews/{}/reject", urlencoding::encode(id));
        self.post_json(&path, &json!({})).await?;
        Ok(())
    }

    // ---- Session ----

    /// Identity of the current operator, if the ambient cookies carry a
    /// valid session
    ///
    /// An anonymous caller is the normal case, not a failure: 401 and 404
    /// both come back as `Ok(None)`.
    pub async fn current_user(&self) -> Result<Option<AdminUser>> {
        let response = self
            .client
            .get(self.url("/auth/me"))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if matches!(response.status().as_u16(), 401 | 404) {
            return Ok(None);
        }

        Self::check(response)
            .await?
            .json::<AdminUser>()
            .await
            .map(Some)
            .map_err(|e| Error::Transport(format!("failed to parse identity: {e}")))
    }

    /// Exchange a one-time callback token for a cookie-backed session
    ///
    /// The backend sets the session cookie on this response; the returned
    /// identity is everything the client keeps in memory.
    pub async fn exchange_session(&self, session_id: &str) -> Result<AdminUser> {
        let response = self
            .post_json("/auth/session", &json!({ "session_id": session_id }))
            .await?;

        response
            .json::<AdminUser>()
            .await
            .map_err(|e| Error::Transport(format!("failed to parse identity: {e}")))
    }

    /// End the current session
    pub async fn logout(&self) -> Result<()> {
        self.post_json("/auth/logout", &json!({})).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_url_building_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/api/").unwrap();
        assert_eq!(client.api_base(), "http://localhost:8000/api");
        assert_eq!(
            client.url("/golf-courses"),
            "http://localhost:8000/api/golf-courses"
        );
    }

    #[test]
    fn test_from_config_uses_api_root() {
        let backend = BackendConfig {
            base_url: "https://api.example.com".to_string(),
            api_root: "/api".to_string(),
            request_timeout: 5,
        };

        let client = ApiClient::from_config(&backend).unwrap();
        assert_eq!(client.api_base(), "https://api.example.com/api");
    }
}
