use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use shared::{
    domain::SelectedFile,
    protocol::{decode_upload_response, UploadResponse, UPLOAD_FIELD, UPLOAD_PATH},
};
use tracing::{debug, info};
use url::Url;

pub mod config;
pub mod controller;
pub mod currency;
pub mod error;
pub mod view;

pub use config::{load_settings, ClientSettings};
pub use controller::{map_source, SubmitLabels, SubmitOutcome, UploadWorkflowController};
pub use currency::format_inr;
pub use error::TransportError;
pub use view::{PageState, PageView, Region};

#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, TransportError>;
}

pub struct HttpUploadClient {
    http: Client,
    base_url: Url,
}

impl HttpUploadClient {
    pub fn new(server_url: &str) -> Result<Self, TransportError> {
        let base_url = Url::parse(server_url).map_err(|source| TransportError::InvalidUrl {
            url: server_url.to_string(),
            source,
        })?;
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    /// Resolves a page-relative source such as `/map?t=1` against the server.
    pub fn resolve(&self, source: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(source)
            .map_err(|source_err| TransportError::InvalidUrl {
                url: source.to_string(),
                source: source_err,
            })
    }

    /// Fetches the embeddable map document the frame would load.
    pub async fn fetch_map(&self, source: &str) -> Result<String, TransportError> {
        let url = self.resolve(source)?;
        debug!(map_url = %url, "map: fetching document");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl UploadTransport for HttpUploadClient {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, TransportError> {
        let url = self.resolve(UPLOAD_PATH)?;
        let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.http.post(url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        info!(
            filename = %file.name,
            status = status.as_u16(),
            body_bytes = body.len(),
            "upload: response received"
        );
        Ok(decode_upload_response(&body)?)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
