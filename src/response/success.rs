use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::status::{canonical_message, transport_status, StatusKind};

/// Success envelope for 2xx outcomes.
///
/// `data` is included only when non-null, `meta` only when non-empty.
#[derive(Debug, Clone)]
pub struct ApiSuccessResponse {
    data: Option<Value>,
    message: Option<String>,
    meta: Map<String, Value>,
    code: u16,
}

#[derive(Serialize)]
struct SuccessBody {
    status: &'static str,
    message: String,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    meta: Map<String, Value>,
}

impl ApiSuccessResponse {
    pub fn new(
        data: Option<Value>,
        message: Option<String>,
        meta: Map<String, Value>,
        code: u16,
    ) -> Self {
        Self {
            data: data.filter(|value| !value.is_null()),
            message,
            meta,
            code,
        }
    }
}

impl IntoResponse for ApiSuccessResponse {
    fn into_response(self) -> Response {
        let body = SuccessBody {
            status: StatusKind::classify(self.code).label(),
            message: self
                .message
                .unwrap_or_else(|| canonical_message(self.code).to_string()),
            code: self.code,
            data: self.data,
            meta: self.meta,
        };

        (transport_status(self.code), Json(body)).into_response()
    }
}
