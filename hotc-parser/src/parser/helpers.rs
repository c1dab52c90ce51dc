//! # 辅助解析函数
//!
//! 手写的字符串解析辅助函数，无正则依赖。

use crate::error::ParseError;

/// 大小写不敏感地查找子串，返回字节偏移
///
/// 只折叠 ASCII 字母，与系统区域设置无关。
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - pat.len())
        .filter(|&i| haystack.is_char_boundary(i))
        .find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}

/// 提取标签之后的字段值
///
/// 输入: `"Card No.: DC/W01-001  Rarity: RR"`, `"Card No.: "`, `Some("Rarity: ")`
/// 输出: `Ok("DC/W01-001")`
///
/// - 找不到 `start` 时返回 `MissingLabel(start)`
/// - 给定 `end` 时，取值截止到 `start` 之后第一次出现的 `end`；找不到同样返回 `MissingLabel(end)`
/// - 行尾只剩去掉尾部空格的标签（如 `"Flavor:"`）时视为空值
///
/// `line_number` 仅用于错误信息（从 1 开始）。
pub fn extract_field<'a>(
    text: &'a str,
    start: &str,
    end: Option<&str>,
    line_number: usize,
) -> Result<&'a str, ParseError> {
    let Some(pos) = text.find(start) else {
        let bare = start.trim_end();
        if !bare.is_empty() && text.trim_end().ends_with(bare) {
            return Ok("");
        }
        return Err(ParseError::missing_label(start, line_number));
    };

    let value = &text[pos + start.len()..];
    let value = match end {
        Some(end) => {
            let end_pos = value
                .find(end)
                .ok_or_else(|| ParseError::missing_label(end, line_number))?;
            &value[..end_pos]
        }
        None => value,
    };

    Ok(value.trim())
}

/// 提取标签之后的第一个单词（到下一个空白为止）
///
/// 输入: `"Color: Yellow  Side: Weiss  Character"`, `"Side: "`
/// 输出: `Ok("Weiss")`
pub fn extract_word<'a>(
    text: &'a str,
    start: &str,
    line_number: usize,
) -> Result<&'a str, ParseError> {
    let pos = text
        .find(start)
        .ok_or_else(|| ParseError::missing_label(start, line_number))?;
    let value = text[pos + start.len()..].trim_start();
    let end = value.find(char::is_whitespace).unwrap_or(value.len());
    Ok(&value[..end])
}

/// 解析整数字段
pub fn parse_number(value: &str, field: &str) -> Result<u32, ParseError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::NumericParse {
            value: value.trim().to_string(),
            field: field.to_string(),
        })
}
