use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SectionService;

// 懒加载的全局 SECTION_SERVICE 实例
static SECTION_SERVICE: Lazy<SectionService> = Lazy::new(SectionService::new_lazy);

pub async fn get_section(req: HttpRequest, jw_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.get_section(&req, jw_id.into_inner()).await
}

pub async fn list_schedules(req: HttpRequest, jw_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.list_schedules(&req, jw_id.into_inner()).await
}

// 配置路由
pub fn configure_sections_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sections")
            .service(web::resource("/{jw_id}").route(web::get().to(get_section)))
            .service(web::resource("/{jw_id}/schedules").route(web::get().to(list_schedules))),
    );
}
