//! # 特征列表
//!
//! 解析 `Traits:` 字段：逗号分隔，每项形如 `日文 (English)`。

use crate::card::BilingualText;

/// 解析单个特征
///
/// 输入: `"竜 (Dragon)"` 或 `"竜 (Dragon),"`
/// 输出: `Some(BilingualText { jp: "竜", en: "Dragon" })`
///
/// 括号前为日文，括号内为英文。括号前或括号内为空、括号不成对时返回 `None`。
pub fn parse_trait(entry: &str) -> Option<BilingualText> {
    let open = entry.find('(')?;
    let jp = entry[..open].trim();
    if jp.is_empty() {
        return None;
    }

    let after_open = &entry[open + 1..];
    let close = after_open.find(')')?;
    let en = after_open[..close].trim();
    if en.is_empty() || en.contains('(') {
        return None;
    }

    Some(BilingualText::new(jp, en))
}

/// 解析特征字段
///
/// 返回 (有效特征, 被丢弃的原始条目)。无效条目不是错误，只交由调用方记录警告。
pub fn parse_traits(field: &str) -> (Vec<BilingualText>, Vec<String>) {
    let mut traits = Vec::new();
    let mut dropped = Vec::new();

    let field = field.trim();
    if field.is_empty() {
        return (traits, dropped);
    }

    for entry in field.split(',') {
        match parse_trait(entry) {
            Some(t) => traits.push(t),
            None => dropped.push(entry.trim().to_string()),
        }
    }

    (traits, dropped)
}
