use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::{ApiResponse, ErrorCode, schedules::responses::SectionSchedulesResponse};

pub async fn list_schedules(
    service: &SectionService,
    request: &HttpRequest,
    jw_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_section_schedules(jw_id).await {
        Ok(Some(schedules)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SectionSchedulesResponse {
                section_jw_id: jw_id,
                schedules,
            },
            "Schedules retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SectionNotFound,
            "Section not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list schedules: {e}"),
            )),
        ),
    }
}
