use actix_web::{web, HttpResponse, Responder};
use common::errors::AppError;
use serde::{Deserialize, Serialize};

use crate::domain::{CallbackPayload, DataType};
use crate::service::ProcessingService;

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub url: Option<String>,
    #[serde(rename = "dataType")]
    pub data_type: Option<String>,
    #[serde(rename = "originalPrompt")]
    pub original_prompt: Option<String>,
}

#[derive(Serialize)]
pub struct ProcessResponse {
    pub message: String,
    pub payload_preview: CallbackPayload,
}

pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("MPC Server is running!")
}

/// Only `url` is required; everything else passes through as supplied.
fn required_url(request: &ProcessRequest) -> Result<&str, AppError> {
    match request.url.as_deref() {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(AppError::Validation("URL is required".to_string())),
    }
}

pub async fn process_url(
    processing_service: web::Data<ProcessingService>,
    request: web::Json<ProcessRequest>,
) -> impl Responder {
    let url = match required_url(&request) {
        Ok(url) => url,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            }));
        }
    };

    let data_type = request
        .data_type
        .clone()
        .map(DataType::from)
        .unwrap_or_default();

    tracing::info!("Processing URL: {}", url);

    match processing_service
        .process_url(url, data_type, request.original_prompt.clone())
        .await
    {
        Ok(payload) => {
            // The real deployment would POST this to the agent's endpoint;
            // for now the payload is only previewed back to the caller.
            if let Ok(preview) = serde_json::to_string(&payload) {
                tracing::info!("Simulating LLM callback payload: {}", preview);
            }

            HttpResponse::Ok().json(ProcessResponse {
                message: "URL processing initiated (simulated callback)".to_string(),
                payload_preview: payload,
            })
        }
        Err(e) => {
            tracing::error!("URL processing error: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}
