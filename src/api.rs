//! Remote API Client
//!
//! HTTP bindings for the records endpoint. Every operation maps transport
//! failures and non-2xx statuses to an [`AppError`]; mutation errors pick up
//! the server-provided message when the response body carries one.

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::Record;

/// Fixed base endpoint for the records API
pub const API_BASE: &str = "http://localhost:3000/api/nombres";

// ========================
// Request/Response Bodies
// ========================

#[derive(Serialize)]
struct NameBody<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Extract the optional `{"error": ...}` message from a failure body
fn parse_error_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
}

async fn server_error(resp: Response) -> Option<String> {
    let body = resp.text().await.ok()?;
    parse_error_body(&body)
}

// ========================
// Operations
// ========================

/// GET the full record collection
pub async fn fetch_all() -> Result<Vec<Record>, AppError> {
    let resp = Client::new()
        .get(API_BASE)
        .send()
        .await
        .map_err(|_| AppError::Fetch)?;
    if !resp.status().is_success() {
        return Err(AppError::Fetch);
    }
    resp.json::<Vec<Record>>().await.map_err(|_| AppError::Fetch)
}

/// POST a new record
pub async fn create(name: &str) -> Result<(), AppError> {
    let resp = Client::new()
        .post(API_BASE)
        .json(&NameBody { name })
        .send()
        .await
        .map_err(|_| AppError::Create(None))?;
    if resp.status().is_success() {
        return Ok(());
    }
    Err(AppError::Create(server_error(resp).await))
}

/// PUT a record's new name
pub async fn update(id: i64, name: &str) -> Result<(), AppError> {
    let resp = Client::new()
        .put(format!("{}/{}", API_BASE, id))
        .json(&NameBody { name })
        .send()
        .await
        .map_err(|_| AppError::Update(None))?;
    if resp.status().is_success() {
        return Ok(());
    }
    Err(AppError::Update(server_error(resp).await))
}

/// DELETE a record
pub async fn delete(id: i64) -> Result<(), AppError> {
    let resp = Client::new()
        .delete(format!("{}/{}", API_BASE, id))
        .send()
        .await
        .map_err(|_| AppError::Delete(None))?;
    if resp.status().is_success() {
        return Ok(());
    }
    Err(AppError::Delete(server_error(resp).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_with_message() {
        assert_eq!(
            parse_error_body(r#"{"error": "El nombre ya existe"}"#),
            Some("El nombre ya existe".to_string())
        );
    }

    #[test]
    fn error_body_without_message() {
        assert_eq!(parse_error_body(r#"{}"#), None);
        assert_eq!(parse_error_body(r#"{"error": null}"#), None);
    }

    #[test]
    fn malformed_error_body() {
        assert_eq!(parse_error_body("not json"), None);
        assert_eq!(parse_error_body(""), None);
    }

    #[test]
    fn name_body_serializes_to_wire_shape() {
        let body = serde_json::to_string(&NameBody { name: "Ana" }).unwrap();
        assert_eq!(body, r#"{"name":"Ana"}"#);
    }
}
