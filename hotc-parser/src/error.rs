//! # Error 模块
//!
//! 定义 hotc-parser 中使用的错误类型。

use thiserror::Error;

/// 单个卡片段落的解析错误
///
/// 任一错误都会中止当前段落的解析，不会产生半成品记录。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// 缺少必需的标签
    #[error("第 {line} 行：缺少标签 '{marker}'")]
    MissingLabel { marker: String, line: usize },

    /// 字段值不属于对应的取值集合
    #[error("无法将 '{value}' 解析为 {variant_set}")]
    Decode { value: String, variant_set: String },

    /// 数值字段不是合法整数
    #[error("字段 {field} 的值 '{value}' 不是合法整数")]
    NumericParse { value: String, field: String },

    /// 游标越出段落范围
    #[error("第 {line} 行：超出段落范围")]
    OutOfRange { line: usize },
}

impl ParseError {
    pub(crate) fn missing_label(marker: &str, line: usize) -> Self {
        Self::MissingLabel {
            marker: marker.to_string(),
            line,
        }
    }
}

/// 带段落序号的解析错误
///
/// `index` 为段落在文档中的序号（从 0 开始，不含页眉）。
#[derive(Error, Debug, Clone, PartialEq)]
#[error("第 {index} 个段落解析失败：{source}")]
pub struct SectionError {
    pub index: usize,
    #[source]
    pub source: ParseError,
}

/// hotc-parser 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HotcError {
    /// 解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),

    /// 段落错误
    #[error(transparent)]
    Section(#[from] SectionError),

    /// JSON 序列化/反序列化失败
    #[error("JSON 处理失败: {0}")]
    Json(String),
}

/// Result 类型别名
pub type HotcResult<T> = Result<T, HotcError>;
