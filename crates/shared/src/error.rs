use thiserror::Error;

pub const NO_FILE_MESSAGE: &str = "Please select a file first.";
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "An error occurred while uploading. Please check network and try again.";

/// Why a single submission attempt ended without a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadFailure {
    #[error("no file selected")]
    Validation,
    #[error("upload transport failure")]
    Transport,
    #[error("server reported: {0}")]
    Logical(String),
}

impl UploadFailure {
    /// Text shown in the message banner for this failure.
    pub fn banner_text(&self) -> String {
        match self {
            Self::Validation => NO_FILE_MESSAGE.to_string(),
            Self::Transport => TRANSPORT_FAILURE_MESSAGE.to_string(),
            Self::Logical(message) => format!("Error: {message}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("upload response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("upload response carries neither an error nor a success flag")]
    UnrecognizedShape,
    #[error("upload response reports success without a numeric avg_sales")]
    MissingAverage,
}
