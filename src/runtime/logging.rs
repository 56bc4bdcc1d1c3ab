//! 日志初始化
//!
//! 服务端与导入工具共用：stdout 非阻塞写入，开发环境彩色文本，生产环境 JSON。

use tracing_appender::non_blocking::WorkerGuard;

/// 日志输出选项
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// EnvFilter 表达式，如 `info` 或 `ustc_catalog=debug`
    pub filter: String,
    pub json: bool,
    /// 输出文件名和行号
    pub with_location: bool,
}

/// 安装全局 tracing subscriber，返回的 guard 必须在程序退出前保持存活
pub fn init_tracing(options: &LoggingOptions) -> WorkerGuard {
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&options.filter);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(!options.json);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if options.json {
        tracing_builder.json().init();
    } else if options.with_location {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.init();
    }

    guard
}
