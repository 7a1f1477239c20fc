//! HTTP implementation of the gateway over the recognition REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::config::ClientConfig;
use crate::domain::{
    Ack, AdminUser, Comment, CreatedShoutout, NewComment, NewShoutout, ReactionKind,
    ReactionUpdate, Report, Shoutout, UserRole,
};
use crate::error::{ClientError, ClientResult};
use crate::gateway::ApiGateway;

/// REST gateway. Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpGateway {
    pub fn new(config: &ClientConfig, token: impl Into<String>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a response to a typed value: 2xx deserializes, anything else
    /// becomes an API rejection carrying the body text.
    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(path, "GET");
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn patch_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!(path, "PATCH");
        let response = self
            .client
            .patch(self.url(path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(path, "PATCH");
        let response = self
            .client
            .patch(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(path, "DELETE");
        let response = self
            .client
            .delete(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl ApiGateway for HttpGateway {
    async fn fetch_shoutouts(&self) -> ClientResult<Vec<Shoutout>> {
        self.get_json("/shoutouts/").await
    }

    async fn fetch_shoutout(&self, shoutout_id: i64) -> ClientResult<Shoutout> {
        self.get_json(&format!("/shoutouts/{shoutout_id}")).await
    }

    async fn create_shoutout(&self, request: &NewShoutout) -> ClientResult<CreatedShoutout> {
        self.post_json("/shoutouts/", request).await
    }

    async fn toggle_reaction(
        &self,
        shoutout_id: i64,
        kind: ReactionKind,
    ) -> ClientResult<ReactionUpdate> {
        self.post_json(&format!("/reactions/{shoutout_id}"), &json!({ "type": kind }))
            .await
    }

    async fn fetch_comments(&self, shoutout_id: i64) -> ClientResult<Vec<Comment>> {
        self.get_json(&format!("/comments/{shoutout_id}")).await
    }

    async fn add_comment(&self, shoutout_id: i64, request: &NewComment) -> ClientResult<Comment> {
        self.post_json(&format!("/comments/{shoutout_id}"), request)
            .await
    }

    async fn flag_comment(&self, comment_id: i64, reason: &str) -> ClientResult<Ack> {
        self.post_json(
            &format!("/comments/{comment_id}/flag"),
            &json!({ "reason": reason }),
        )
        .await
    }

    async fn report_shoutout(&self, shoutout_id: i64, reason: &str) -> ClientResult<Ack> {
        self.post_json(&format!("/reports/{shoutout_id}"), &json!({ "reason": reason }))
            .await
    }

    async fn admin_reports(&self) -> ClientResult<Vec<Report>> {
        self.get_json("/admin/reports").await
    }

    async fn admin_delete_report(&self, report_id: i64) -> ClientResult<Ack> {
        self.delete_json(&format!("/admin/reports/{report_id}")).await
    }

    async fn admin_delete_shoutout(&self, shoutout_id: i64) -> ClientResult<Ack> {
        self.delete_json(&format!("/admin/shoutouts/{shoutout_id}"))
            .await
    }

    async fn admin_users(&self) -> ClientResult<Vec<AdminUser>> {
        self.get_json("/admin/users").await
    }

    async fn admin_update_role(&self, user_id: i64, role: UserRole) -> ClientResult<Ack> {
        self.patch_json(
            &format!("/admin/users/{user_id}/role"),
            &json!({ "role": role }),
        )
        .await
    }

    async fn admin_toggle_active(&self, user_id: i64) -> ClientResult<Ack> {
        self.patch_empty(&format!("/admin/users/{user_id}/active"))
            .await
    }

    async fn admin_block_user(&self, user_id: i64) -> ClientResult<Ack> {
        self.post_empty(&format!("/admin/users/{user_id}/block")).await
    }

    async fn admin_delete_user(&self, user_id: i64) -> ClientResult<Ack> {
        self.delete_json(&format!("/admin/users/{user_id}")).await
    }

    async fn admin_comments(&self) -> ClientResult<Vec<Comment>> {
        self.get_json("/admin/comments").await
    }

    async fn admin_flagged_comments(&self) -> ClientResult<Vec<Comment>> {
        self.get_json("/admin/comments/flagged").await
    }

    async fn admin_delete_comment(&self, comment_id: i64) -> ClientResult<Ack> {
        self.delete_json(&format!("/admin/comments/{comment_id}"))
            .await
    }
}
