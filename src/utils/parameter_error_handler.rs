//! 请求参数解析失败时返回统一格式的错误响应

use actix_web::error::{InternalError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: String) -> Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

/// 路径参数错误，如 `/api/v1/sections/abc`
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    bad_request(format!("Invalid path parameter in {}: {err}", req.path()))
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    bad_request(format!("Invalid query parameter: {err}"))
}
