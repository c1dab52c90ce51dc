//! # Config 模块
//!
//! 导出工具的配置。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件（`--config` 指定的 JSON）
//! 3. 默认值（最低）

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 段落解析失败时的处理方式
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// 第一个失败的段落即中止
    FailFast,
    /// 跳过失败的段落，继续解析后续段落
    #[default]
    SkipInvalid,
}

/// 导出配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DumpConfig {
    /// 段落失败处理方式
    #[serde(default)]
    pub error_policy: ErrorPolicy,

    /// 是否输出格式化 JSON
    #[serde(default)]
    pub pretty: bool,

    /// 日志级别（trace/debug/info/warn/error）
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 目录输入时收集的文件扩展名
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_extension() -> String {
    "txt".to_string()
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::default(),
            pretty: false,
            log_level: default_log_level(),
            extension: default_extension(),
        }
    }
}

/// 命令行覆盖项
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub error_policy: Option<ErrorPolicy>,
    pub pretty: bool,
    pub verbose: bool,
}

impl DumpConfig {
    /// 从 JSON 文件加载配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    /// 从 JSON 字符串解析配置，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 应用命令行覆盖项
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(policy) = overrides.error_policy {
            self.error_policy = policy;
        }
        if overrides.pretty {
            self.pretty = true;
        }
        if overrides.verbose {
            self.log_level = "debug".to_string();
        }
        self
    }
}

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 读取失败
    #[error("配置文件读取失败: {0}")]
    Io(String),
    /// 解析失败
    #[error("配置文件解析失败: {0}")]
    Parse(String),
}
