use common::errors::AppError;
use common::time;

use crate::clients::FetchClient;
use crate::domain::{CallbackPayload, DataType, ResultPackage};

/// Not derived from the upstream status: a non-2xx fetch still packages with
/// this note, only a transport failure aborts the pipeline.
const STATUS_METADATA: &str = "Content gathering complete.";

/// Orchestrates a single fetch-and-package cycle. Holds no per-request state.
#[derive(Clone)]
pub struct ProcessingService {
    fetch_client: FetchClient,
}

impl ProcessingService {
    pub fn new(fetch_client: FetchClient) -> Self {
        Self { fetch_client }
    }

    /// Fetches `url` and wraps the transport result into the callback
    /// envelope. The timestamp is stamped after the fetch completes, and
    /// `original_prompt` passes through untouched.
    pub async fn process_url(
        &self,
        url: &str,
        data_type: DataType,
        original_prompt: Option<String>,
    ) -> Result<CallbackPayload, AppError> {
        if let DataType::Unsupported(requested) = &data_type {
            tracing::warn!(
                "dataType '{}' is not implemented yet, returning raw http_response",
                requested
            );
        }

        let package = self.fetch_client.fetch(url).await?;

        Ok(CallbackPayload {
            automated_return: true,
            original_prompt,
            timestamp: time::iso_timestamp(),
            status_metadata: STATUS_METADATA.to_string(),
            result_package: ResultPackage {
                data_type: DataType::HttpResponse.as_str().to_string(),
                data: package,
            },
        })
    }
}
