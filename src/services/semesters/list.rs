use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SemesterService;
use crate::models::{ApiResponse, ErrorCode, semesters::responses::SemesterListResponse};

pub async fn list_semesters(
    service: &SemesterService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_semesters().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SemesterListResponse { items },
            "Semesters retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list semesters: {e}"),
            )),
        ),
    }
}
