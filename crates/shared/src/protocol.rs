use serde::Deserialize;
use serde_json::Value;

use crate::error::ProtocolError;

pub const UPLOAD_PATH: &str = "/";
pub const MAP_PATH: &str = "/map";
pub const UPLOAD_FIELD: &str = "file";
pub const CACHE_BUSTER_PARAM: &str = "t";

#[derive(Debug, Clone, PartialEq)]
pub enum UploadResponse {
    Success {
        avg_sales: f64,
        map_html: Option<String>,
    },
    Failure {
        error: String,
    },
}

/// Body of `POST /` as the service writes it. Every field is optional on the
/// wire; [`decode_upload_response`] decides which variant it is.
#[derive(Debug, Default, Deserialize)]
pub struct UploadResponseBody {
    #[serde(default)]
    pub success: Option<Value>,
    #[serde(default)]
    pub avg_sales: Option<Value>,
    #[serde(default)]
    pub map_html: Option<String>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl TryFrom<UploadResponseBody> for UploadResponse {
    type Error = ProtocolError;

    fn try_from(body: UploadResponseBody) -> Result<Self, Self::Error> {
        // A non-empty error string takes precedence over the success flag.
        if let Some(error) = body.error.as_ref().and_then(error_text) {
            return Ok(Self::Failure { error });
        }

        if body.success.as_ref().is_some_and(is_truthy) {
            let avg_sales = body
                .avg_sales
                .as_ref()
                .and_then(numeric_value)
                .ok_or(ProtocolError::MissingAverage)?;
            return Ok(Self::Success {
                avg_sales,
                map_html: body.map_html,
            });
        }

        Err(ProtocolError::UnrecognizedShape)
    }
}

pub fn decode_upload_response(raw: &[u8]) -> Result<UploadResponse, ProtocolError> {
    let body: UploadResponseBody = serde_json::from_slice(raw)?;
    UploadResponse::try_from(body)
}

fn error_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Numbers, and strings holding a number (`"123"`), as the page coerces them.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
