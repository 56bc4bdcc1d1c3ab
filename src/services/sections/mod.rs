pub mod get;
pub mod schedules;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct SectionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SectionService {
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

    // 根据教务 ID 获取教学班详情
    pub async fn get_section(&self, request: &HttpRequest, jw_id: i64) -> ActixResult<HttpResponse> {
        get::get_section(self, request, jw_id).await
    }

    // 获取教学班的排课
    pub async fn list_schedules(
        &self,
        request: &HttpRequest,
        jw_id: i64,
    ) -> ActixResult<HttpResponse> {
        schedules::list_schedules(self, request, jw_id).await
    }
}
