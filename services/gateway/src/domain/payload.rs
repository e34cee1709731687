use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How a fetched resource should be processed before packaging.
///
/// Only `http_response` is implemented. Other values (PDF, image, scraped
/// text, LLM-rendered content) are accepted but fall back to the raw
/// `http_response` path until their pipelines exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    HttpResponse,
    Unsupported(String),
}

impl DataType {
    pub fn as_str(&self) -> &str {
        match self {
            DataType::HttpResponse => "http_response",
            DataType::Unsupported(s) => s.as_str(),
        }
    }
}

impl Default for DataType {
    fn default() -> Self {
        DataType::HttpResponse
    }
}

impl From<String> for DataType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "http_response" => DataType::HttpResponse,
            _ => DataType::Unsupported(s),
        }
    }
}

/// Raw transport result of a single fetch. Immutable once built.
///
/// `url` echoes the URL the caller asked for, not the post-redirect location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponsePackage {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub content: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPackage {
    #[serde(rename = "dataType")]
    pub data_type: String,
    pub data: HttpResponsePackage,
}

/// Envelope meant for eventual delivery to the consuming agent. In current
/// scope it is only returned to the caller as a preview, never transmitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackPayload {
    pub automated_return: bool,
    pub original_prompt: Option<String>,
    pub timestamp: String,
    pub status_metadata: String,
    pub result_package: ResultPackage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_known_value() {
        assert_eq!(DataType::from("http_response".to_string()), DataType::HttpResponse);
    }

    #[test]
    fn test_data_type_unknown_value_falls_back() {
        let data_type = DataType::from("pdf".to_string());
        assert_eq!(data_type, DataType::Unsupported("pdf".to_string()));
        assert_eq!(data_type.as_str(), "pdf");
    }

    #[test]
    fn test_callback_payload_wire_shape() {
        let payload = CallbackPayload {
            automated_return: true,
            original_prompt: None,
            timestamp: "2025-01-01T00:00:00+00:00".to_string(),
            status_metadata: "Content gathering complete.".to_string(),
            result_package: ResultPackage {
                data_type: DataType::HttpResponse.as_str().to_string(),
                data: HttpResponsePackage {
                    status_code: 200,
                    headers: HashMap::new(),
                    content: "ok".to_string(),
                    url: "http://example.test/".to_string(),
                },
            },
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["automated_return"], true);
        // omitted prompt stays null, never an empty string
        assert!(value["original_prompt"].is_null());
        assert_eq!(value["result_package"]["dataType"], "http_response");
        assert_eq!(value["result_package"]["data"]["status_code"], 200);
        assert_eq!(value["result_package"]["data"]["url"], "http://example.test/");
    }
}
