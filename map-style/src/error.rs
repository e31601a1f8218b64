//! # Error 模块
//!
//! 定义 map-style 中使用的错误类型。

use thiserror::Error;

/// map-style 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// 过渡参数为负，无法转换为 `std::time::Duration`
    #[error("过渡参数 '{field}' 不能为负数：{value}ms")]
    NegativeTiming { field: &'static str, value: i64 },

    /// 配置文件读取失败
    #[error("无法读取配置文件 {path}: {message}")]
    Io { path: String, message: String },

    /// 配置内容不是合法的 JSON
    #[error("配置解析失败: {0}")]
    Json(String),
}

impl From<serde_json::Error> for StyleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

/// Result 类型别名
pub type StyleResult<T> = Result<T, StyleError>;
