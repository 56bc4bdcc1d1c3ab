use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_section(
    service: &SectionService,
    request: &HttpRequest,
    jw_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_section_by_jw_id(jw_id).await {
        Ok(Some(section)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            section,
            "Section retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SectionNotFound,
            "Section not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get section: {e}"),
            )),
        ),
    }
}
