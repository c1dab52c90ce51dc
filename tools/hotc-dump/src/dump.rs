//! # Dump 模块
//!
//! 收集输入文件，按错误策略逐文件解析。

use std::path::{Path, PathBuf};

use anyhow::Context;
use hotc_parser::{CardRecord, SectionError, parse_document};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::ErrorPolicy;

/// 单个文件的解析结果
#[derive(Debug, Default)]
pub struct DocumentReport {
    /// 文件标识（路径）
    pub id: String,
    /// 成功解析的记录（按段落顺序）
    pub records: Vec<CardRecord>,
    /// 被跳过的段落
    pub failures: Vec<SectionError>,
    /// 非致命警告
    pub warnings: Vec<String>,
}

impl DocumentReport {
    /// 段落总数
    pub fn sections(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// 展开输入路径：文件原样保留，目录递归收集指定扩展名的文件
pub fn collect_files(paths: &[PathBuf], extension: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.into_path())
                .filter(|p| p.extension().is_some_and(|ext| ext == extension))
                .collect();
            found.sort();
            debug!(dir = %path.display(), count = found.len(), "收集目录");
            files.extend(found);
        } else {
            anyhow::bail!("路径不存在: {}", path.display());
        }
    }

    Ok(files)
}

/// 解析一份文档文本
///
/// `FailFast` 时第一个失败段落转为错误返回；`SkipInvalid` 时记录失败并继续。
pub fn process_document(
    id: &str,
    text: &str,
    policy: ErrorPolicy,
) -> anyhow::Result<DocumentReport> {
    let mut report = DocumentReport {
        id: id.to_string(),
        ..Default::default()
    };

    let mut sections = parse_document(text);
    for result in sections.by_ref() {
        match result {
            Ok(record) => report.records.push(record),
            Err(e) if policy == ErrorPolicy::FailFast => {
                return Err(e).with_context(|| format!("{} 解析失败", id));
            }
            Err(e) => report.failures.push(e),
        }
    }
    report.warnings = sections.warnings().to_vec();

    info!(
        file = %id,
        records = report.records.len(),
        failures = report.failures.len(),
        "文档解析完成"
    );
    Ok(report)
}

/// 读取并解析一个文件
pub fn process_file(path: &Path, policy: ErrorPolicy) -> anyhow::Result<DocumentReport> {
    let id = path.display().to_string();
    let text =
        std::fs::read_to_string(path).with_context(|| format!("无法读取文件: {}", id))?;
    process_document(&id, &text, policy)
}
