use crate::storage::Storage;
use std::sync::Arc;
use tracing::{info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 记录当前库中的数据规模，空库时提示先运行导入工具
async fn report_catalog(storage: &Arc<dyn Storage>) {
    match storage.count_catalog().await {
        Ok(counts) if counts.semesters == 0 => {
            warn!("Catalog is empty, run `load-from-static` to import the static cache");
        }
        Ok(counts) => {
            info!(
                "Catalog loaded: {} semesters, {} courses, {} sections, {} teachers",
                counts.semesters, counts.courses, counts.sections, counts.teachers
            );
        }
        Err(e) => {
            warn!("Failed to count catalog rows: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> crate::errors::Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    report_catalog(&storage).await;

    Ok(StartupContext { storage })
}
