use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::TeacherService;

// 懒加载的全局 TEACHER_SERVICE 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn get_teacher(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_teachers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .service(web::resource("/{id}").route(web::get().to(get_teacher))),
    );
}
