use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SemesterService;
use crate::models::{ApiResponse, ErrorCode, semesters::responses::SemesterSectionsResponse};

pub async fn list_semester_sections(
    service: &SemesterService,
    request: &HttpRequest,
    jw_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let semester = match storage.get_semester_by_jw_id(jw_id).await {
        Ok(Some(semester)) => semester,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SemesterNotFound,
                "Semester not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get semester: {e}"),
                )),
            );
        }
    };

    match storage.list_semester_sections(jw_id).await {
        Ok(Some(sections)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SemesterSectionsResponse { semester, sections },
            "Sections retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SemesterNotFound,
            "Semester not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list sections: {e}"),
            )),
        ),
    }
}
