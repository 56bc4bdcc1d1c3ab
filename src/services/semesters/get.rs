use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SemesterService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_semester(
    service: &SemesterService,
    request: &HttpRequest,
    jw_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_semester_by_jw_id(jw_id).await {
        Ok(Some(semester)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            semester,
            "Semester retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SemesterNotFound,
            "Semester not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get semester: {e}"),
            )),
        ),
    }
}
