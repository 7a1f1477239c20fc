// Report queue - open reports against shout-outs, resolved by deletion
use bragboard_client::domain::Report;
use bragboard_client::{ApiGateway, ClientResult};
use tracing::info;

/// Cached view of the open-report queue.
pub struct ReportQueue<G> {
    gateway: G,
    reports: Vec<Report>,
}

impl<G: ApiGateway> ReportQueue<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            reports: Vec::new(),
        }
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Reload the open-report list from the server.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.reports = self.gateway.admin_reports().await?;
        Ok(())
    }

    /// Resolve (delete) a report, then reload the list.
    pub async fn resolve(&mut self, report_id: i64) -> ClientResult<()> {
        self.gateway.admin_delete_report(report_id).await?;
        info!(report_id, "report resolved");
        self.refresh().await
    }

    /// Delete the reported shout-out itself, then reload the list; the
    /// server cascades reports of a deleted post.
    pub async fn delete_shoutout(&mut self, shoutout_id: i64) -> ClientResult<()> {
        self.gateway.admin_delete_shoutout(shoutout_id).await?;
        info!(shoutout_id, "shoutout deleted");
        self.refresh().await
    }
}
