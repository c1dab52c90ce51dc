//! # 触发列表
//!
//! 解析 `Triggers:` 字段。

use crate::card::{Trigger, lookup_variant};

/// 解析触发短语
///
/// - `None ...` → 空列表
/// - `2 Soul ...` → 两个 `Soul`
/// - 其他：`Draw` 视为 `Book`，按空格切分后逐个解码
///
/// 返回 (触发列表, 无法识别的词)。
pub fn parse_triggers(phrase: &str) -> (Vec<Trigger>, Vec<String>) {
    let phrase = phrase.trim();

    if phrase.starts_with("None") {
        return (Vec::new(), Vec::new());
    }
    if phrase.starts_with("2 Soul") {
        return (vec![Trigger::Soul, Trigger::Soul], Vec::new());
    }

    let phrase = phrase.replace("Draw", "Book");
    let mut triggers = Vec::new();
    let mut dropped = Vec::new();

    for token in phrase.split(' ').filter(|t| !t.is_empty()) {
        match lookup_variant::<Trigger>(token) {
            Some(t) => triggers.push(t),
            None => dropped.push(token.to_string()),
        }
    }

    (triggers, dropped)
}
