//! # 能力文本
//!
//! 把 `TEXT:` 之后的整块文本拆成逐条能力。
//!
//! ```text
//! [A] 抽一张卡。          [AUTO] 抽一张卡。
//! [C] 常驻效果，     →    [CONT] 常驻效果， 跨行说明。
//! 跨行说明。
//! ```

/// 缩写标签 → 规范标签
const TAG_EXPANSIONS: [(&str, &str); 3] = [("[A]", "[AUTO]"), ("[C]", "[CONT]"), ("[S]", "[ACT]")];

/// 展开缩写标签
pub fn expand_tags(text: &str) -> String {
    TAG_EXPANSIONS
        .iter()
        .fold(text.to_string(), |acc, (short, long)| acc.replace(short, long))
}

fn starts_with_tag(line: &str) -> bool {
    TAG_EXPANSIONS
        .iter()
        .any(|(_, long)| line.starts_with(long))
}

/// 拆分能力文本
///
/// 以行首的规范标签作为新能力的开始；首个标签之前的文本单独成条。
/// 每条去除首尾空白，内部换行折叠为单个空格，空条目丢弃。
pub fn split_abilities(block: &str) -> Vec<String> {
    let expanded = expand_tags(block.trim());

    let mut entries: Vec<Vec<&str>> = Vec::new();
    for line in expanded.lines() {
        let line = line.trim();
        if entries.is_empty() || starts_with_tag(line) {
            entries.push(vec![line]);
        } else if let Some(current) = entries.last_mut() {
            current.push(line);
        }
    }

    entries
        .into_iter()
        .map(|lines| {
            lines
                .into_iter()
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|entry| !entry.is_empty())
        .collect()
}
