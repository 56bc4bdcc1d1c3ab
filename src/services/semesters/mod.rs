pub mod get;
pub mod list;
pub mod sections;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct SemesterService {
    storage: Option<Arc<dyn Storage>>,
}

impl SemesterService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取学期列表
    pub async fn list_semesters(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_semesters(self, request).await
    }

    // 根据教务 ID 获取学期
    pub async fn get_semester(&self, request: &HttpRequest, jw_id: i64) -> ActixResult<HttpResponse> {
        get::get_semester(self, request, jw_id).await
    }

    // 获取学期内的教学班
    pub async fn list_semester_sections(
        &self,
        request: &HttpRequest,
        jw_id: i64,
    ) -> ActixResult<HttpResponse> {
        sections::list_semester_sections(self, request, jw_id).await
    }
}
