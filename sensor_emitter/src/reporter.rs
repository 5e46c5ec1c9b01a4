use async_trait::async_trait;
use sensor_codecs::report::Report;

/// Delivery seam for one report per cycle. The emitter never retries;
/// an error here is logged by the caller and the cycle moves on.
#[async_trait]
pub trait ReportSink {
    async fn deliver(&self, report: &Report) -> anyhow::Result<()>;
}

/// Fire-and-forget JSON POST to the collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpReporter {
    url: String,
    client: reqwest::Client,
}

impl HttpReporter {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ReportSink for HttpReporter {
    async fn deliver(&self, report: &Report) -> anyhow::Result<()> {
        let response = self.client.post(&self.url).json(report).send().await?;
        let status = response.status();
        if status.is_success() {
            tracing::info!("Delivered {} observations ({status})", report.data.len());
        } else {
            // Still at-most-once; the response body is not part of the contract.
            tracing::warn!("Collection endpoint replied {status}");
        }
        Ok(())
    }
}
