//! # 行扫描器
//!
//! 将段落按行切分，提供带游标的顺序读取。

use crate::error::ParseError;

/// 行扫描器
///
/// 游标是预切分行数组上的下标，文本本身不可变。
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
}

impl<'a> LineScanner<'a> {
    /// 按换行切分文本（`\r\n` 与 `\n` 均可）
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            cursor: 0,
        }
    }

    /// 当前游标位置（从 0 开始）
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// 当前行号（从 1 开始，用于错误信息）
    pub fn line_number(&self) -> usize {
        self.cursor + 1
    }

    /// 是否已越过最后一行
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    /// 读取当前行
    pub fn current_line(&self) -> Result<&'a str, ParseError> {
        self.lines
            .get(self.cursor)
            .copied()
            .ok_or(ParseError::OutOfRange {
                line: self.line_number(),
            })
    }

    /// 查看当前行之后第 `offset` 行，不移动游标
    pub fn peek(&self, offset: usize) -> Option<&'a str> {
        self.lines.get(self.cursor + offset).copied()
    }

    /// 前进 `n` 行
    pub fn advance(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_add(n);
    }

    /// 前进 1 行
    pub fn next_line(&mut self) {
        self.advance(1);
    }

    /// 后退 `n` 行
    pub fn retreat(&mut self, n: usize) -> Result<(), ParseError> {
        self.cursor = self
            .cursor
            .checked_sub(n)
            .ok_or(ParseError::OutOfRange {
                line: self.line_number(),
            })?;
        Ok(())
    }

    /// 逐行前进，直到当前行满足 `predicate`
    ///
    /// 段落读完仍未满足时返回 `OutOfRange`。
    pub fn skip_until(&mut self, predicate: impl Fn(&str) -> bool) -> Result<&'a str, ParseError> {
        loop {
            let line = self.current_line()?;
            if predicate(line) {
                return Ok(line);
            }
            self.next_line();
        }
    }

    /// 从当前行到段落末尾的全部文本（换行连接）
    pub fn remainder(&self) -> String {
        self.lines
            .get(self.cursor..)
            .map(|rest| rest.join("\n"))
            .unwrap_or_default()
    }
}
