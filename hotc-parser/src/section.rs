//! # Section 模块
//!
//! 文档切分与逐段解析。
//!
//! ```text
//! 页眉
//! ================================================================================
//! 段落 0
//! ================================================================================
//! 段落 1
//! ================================================================================
//! 页脚
//! ```
//!
//! 每个段落独立解析：某段失败只产生该段的 `Err`，后续段落照常解析。
//! 需要整体失败时，调用方可 `collect::<Result<Vec<_>, _>>()`。

use crate::card::CardRecord;
use crate::error::SectionError;
use crate::parser::Parser;

/// 段落分隔行（80 个 `=`）
pub const SECTION_SEPARATOR: &str =
    "================================================================================";

/// 按分隔行切分文档，丢弃页眉和页脚
pub fn split_sections(document: &str) -> Vec<&str> {
    let pieces: Vec<&str> = document.split(SECTION_SEPARATOR).collect();
    if pieces.len() < 3 {
        return Vec::new();
    }
    pieces[1..pieces.len() - 1].to_vec()
}

/// 逐段解析迭代器
///
/// 惰性：每次 `next` 只解析一个段落，按输入顺序产出。
///
/// 警告在整个文档范围内累积，迭代期间不会清空。
pub struct Sections<I> {
    inner: I,
    index: usize,
    parser: Parser,
    warnings: Vec<String>,
}

impl<I> Sections<I> {
    /// 已产出段落累计的警告（带段落序号前缀，只增不减）
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl<I, S> Iterator for Sections<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<CardRecord, SectionError>;

    fn next(&mut self) -> Option<Self::Item> {
        let section = self.inner.next()?;
        let index = self.index;
        self.index += 1;

        let result = self
            .parser
            .parse_section(section.as_ref())
            .map_err(|source| SectionError { index, source });

        self.warnings.extend(
            self.parser
                .warnings()
                .iter()
                .map(|w| format!("段落 {}: {}", index, w)),
        );

        if let Err(e) = &result {
            tracing::warn!(error = %e, "段落解析失败");
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// 逐段解析
pub fn parse_all<I>(sections: I) -> Sections<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Sections {
        inner: sections.into_iter(),
        index: 0,
        parser: Parser::new(),
        warnings: Vec::new(),
    }
}

/// 切分并逐段解析整个文档
pub fn parse_document(document: &str) -> Sections<std::vec::IntoIter<&str>> {
    parse_all(split_sections(document))
}
