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
macro_rules! define_courseflow_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CourseFlowError {
            $($variant(String),)*
        }

        impl CourseFlowError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CourseFlowError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CourseFlowError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CourseFlowError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CourseFlowError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CourseFlowError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_courseflow_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    ConstraintViolation("E005", "Constraint Violation"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
}

impl CourseFlowError {
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

impl fmt::Display for CourseFlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CourseFlowError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for CourseFlowError {
    fn from(err: sea_orm::DbErr) -> Self {
        CourseFlowError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CourseFlowError {
    fn from(err: serde_json::Error) -> Self {
        CourseFlowError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CourseFlowError {
    fn from(err: chrono::ParseError) -> Self {
        CourseFlowError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CourseFlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CourseFlowError::database_config("test").code(), "E001");
        assert_eq!(CourseFlowError::validation("test").code(), "E004");
        assert_eq!(CourseFlowError::constraint_violation("test").code(), "E005");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CourseFlowError::validation("test").error_type(),
            "Validation Error"
        );
        assert_eq!(
            CourseFlowError::constraint_violation("test").error_type(),
            "Constraint Violation"
        );
    }

    #[test]
    fn test_error_message() {
        let err = CourseFlowError::validation("maximum_score is required");
        assert_eq!(err.message(), "maximum_score is required");
    }

    #[test]
    fn test_format_simple() {
        let err = CourseFlowError::not_found("no such course");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("no such course"));
    }
}
