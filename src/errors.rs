//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_catalog_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CatalogError {
            $($variant(String),)*
        }

        impl CatalogError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CatalogError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CatalogError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CatalogError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CatalogError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CatalogError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_catalog_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Serialization("E005", "Serialization Error"),
    DateParse("E006", "Date Parse Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    ExternalCommand("E009", "External Command Error"),
    MissingData("E010", "Missing Prerequisite Data"),
}

impl CatalogError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CatalogError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        CatalogError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CatalogError {
    fn from(err: chrono::ParseError) -> Self {
        CatalogError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CatalogError::database_config("test").code(), "E001");
        assert_eq!(CatalogError::validation("test").code(), "E007");
        assert_eq!(CatalogError::external_command("test").code(), "E009");
        assert_eq!(CatalogError::missing_data("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CatalogError::external_command("git").error_type(),
            "External Command Error"
        );
        assert_eq!(
            CatalogError::missing_data("no semesters").error_type(),
            "Missing Prerequisite Data"
        );
    }

    #[test]
    fn test_from_conversions() {
        let err: CatalogError = serde_json::from_str::<i64>("nope").unwrap_err().into();
        assert_eq!(err.code(), "E005");

        let err: CatalogError = chrono::NaiveDate::parse_from_str("2024-13-01", "%Y-%m-%d")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "E006");
    }

    #[test]
    fn test_format_simple() {
        let err = CatalogError::file_operation("list.json missing");
        let formatted = err.format_simple();
        assert!(formatted.contains("File Operation Error"));
        assert!(formatted.contains("list.json missing"));
    }
}
