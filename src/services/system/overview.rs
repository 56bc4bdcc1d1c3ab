use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::models::{
    ApiResponse, AppStartTime, ErrorCode,
    system::responses::OverviewResponse,
};

const RECENT_SEMESTER_LIMIT: u64 = 5;

/// 获取数据概览：各实体数量与最近学期
pub async fn get_overview(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let counts = match storage.count_catalog().await {
        Ok(counts) => counts,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to count catalog: {e}"),
                )),
            );
        }
    };

    let recent_semesters = match storage.list_recent_semesters(RECENT_SEMESTER_LIMIT).await {
        Ok(semesters) => semesters,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list semesters: {e}"),
                )),
            );
        }
    };

    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or_default();

    let response = OverviewResponse {
        system_name: config.app.system_name.clone(),
        counts,
        recent_semesters,
        uptime_seconds,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Overview retrieved successfully",
    )))
}
