//! 静态缓存导入工具
//!
//! 同步 Life-USTC/static 仓库的 `cache` 目录，然后把学期、教学班与课表导入数据库。

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use ustc_catalog::config::AppConfig;
use ustc_catalog::errors::CatalogError;
use ustc_catalog::importer::{fetch_static_cache, import_from_cache};
use ustc_catalog::runtime::logging::{LoggingOptions, init_tracing};
use ustc_catalog::storage::sea_orm_storage::SeaOrmStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// tracing 没有 CRITICAL，归入 error
    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Load the USTC catalog from the static cache repository")]
struct Cli {
    /// 存放 static 仓库克隆的目录，默认取配置 import.cache_dir
    #[arg(long, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// 日志级别，默认取配置 app.log_level
    #[arg(long, value_enum, ignore_case = true)]
    log_level: Option<LogLevel>,
}

async fn run(cli: Cli, config: &AppConfig) -> Result<(), CatalogError> {
    let cache_dir = cli
        .cache_dir
        .unwrap_or_else(|| PathBuf::from(&config.import.cache_dir));

    // git 失败时不连接数据库
    let cache_root =
        fetch_static_cache(&cache_dir, &config.import.repository, &config.import.branch)?;
    info!("静态缓存就绪: {}", cache_root.display());

    let storage = SeaOrmStorage::connect(&config.database).await?;
    let report = import_from_cache(storage.connection(), &cache_root).await?;

    for semester in &report.semesters {
        if let Some(error) = &semester.error {
            error!("学期 {} ({}) 未完整导入: {}", semester.code, semester.jw_id, error);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    setup_panic!();

    let cli = Cli::parse();

    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        return ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    let filter = cli
        .log_level
        .map(|level| level.as_filter().to_string())
        .unwrap_or_else(|| config.app.log_level.clone());
    let _guard = init_tracing(&LoggingOptions {
        filter,
        json: config.is_production(),
        with_location: false,
    });

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("导入失败: {}", e);
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            #[cfg(not(debug_assertions))]
            eprintln!("{}", e.format_simple());
            ExitCode::FAILURE
        }
    }
}
