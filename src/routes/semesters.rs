use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SemesterService;

// 懒加载的全局 SEMESTER_SERVICE 实例
static SEMESTER_SERVICE: Lazy<SemesterService> = Lazy::new(SemesterService::new_lazy);

// HTTP处理程序
pub async fn list_semesters(req: HttpRequest) -> ActixResult<HttpResponse> {
    SEMESTER_SERVICE.list_semesters(&req).await
}

pub async fn get_semester(req: HttpRequest, jw_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    SEMESTER_SERVICE.get_semester(&req, jw_id.into_inner()).await
}

pub async fn list_semester_sections(
    req: HttpRequest,
    jw_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SEMESTER_SERVICE
        .list_semester_sections(&req, jw_id.into_inner())
        .await
}

// 配置路由
pub fn configure_semesters_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/semesters")
            .service(web::resource("").route(web::get().to(list_semesters)))
            .service(web::resource("/{jw_id}").route(web::get().to(get_semester)))
            .service(web::resource("/{jw_id}/sections").route(web::get().to(list_semester_sections))),
    );
}
