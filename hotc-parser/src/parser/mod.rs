//! # Parser 模块
//!
//! 单个卡片段落的解析器（手写字符串解析，无 regex 依赖）。
//!
//! ## 段落布局
//!
//! ```text
//! <英文卡名>
//! <日文卡名>
//! Card No.: <卡号>  Rarity: <稀有度>
//! Color: <颜色>  Side: <阵营>  <类型>
//! Level: <n>  Cost: <n>  Power: <n>  Soul: <n>
//! Traits: <日文> (<英文>), ...
//! Triggers: <触发>
//! Flavor: <风味文本，可跨行>
//! TEXT: <能力文本，可跨行>
//! ```
//!
//! 字段按固定顺序单遍读取，只在卡名处回退一次。
//!
//! ## 模块结构
//!
//! - `scanner`: 行扫描器
//! - `helpers`: 标签定位与字段提取
//! - `trait_list`: 特征解析
//! - `trigger_list`: 触发解析
//! - `ability`: 能力文本拆分

mod ability;
mod helpers;
mod scanner;
mod trait_list;
mod trigger_list;

#[cfg(test)]
mod tests;

use tracing::{debug, info};

use crate::card::{
    BilingualText, CardColor, CardRecord, CardSide, CardType, CardVariant, decode_variant,
};
use crate::error::ParseError;

pub use ability::{expand_tags, split_abilities};
pub use helpers::{extract_field, extract_word, find_ignore_case, parse_number};
pub use scanner::LineScanner;
pub use trait_list::{parse_trait, parse_traits};
pub use trigger_list::parse_triggers;

pub const CARD_NO: &str = "Card No.: ";
pub const RARITY: &str = "Rarity: ";
pub const COLOR: &str = "Color: ";
pub const SIDE: &str = "Side: ";
pub const LEVEL: &str = "Level: ";
pub const COST: &str = "Cost: ";
pub const POWER: &str = "Power: ";
pub const SOUL: &str = "Soul: ";
pub const TRAITS: &str = "Traits: ";
pub const TRIGGERS: &str = "Triggers: ";
pub const FLAVOR: &str = "Flavor: ";
pub const RULES_TEXT: &str = "TEXT: ";

/// 写入 `CardRecord::remarks` 的来源说明
pub const REMARKS: &str = "Extractor: hotc-parser";

/// 段落解析器
pub struct Parser {
    /// 解析警告（被丢弃的特征、无法识别的触发）
    warnings: Vec<String>,
}

impl Parser {
    /// 创建新的解析器
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// 解析单个段落
    ///
    /// 每次调用前清空警告。任何标签缺失、取值解码失败或整数解析失败都会中止本段落。
    pub fn parse_section(&mut self, text: &str) -> Result<CardRecord, ParseError> {
        self.warnings.clear();
        let mut scanner = LineScanner::new(text);

        // 1. 定位卡号行
        let card_no_line = scanner
            .skip_until(|line| line.starts_with(CARD_NO))
            .map_err(|_| ParseError::missing_label(CARD_NO, scanner.line_number()))?;
        let card_no_at = scanner.line_number();

        // 2. 卡号与稀有度（同一行）
        let serial = extract_field(card_no_line, CARD_NO, Some(RARITY), card_no_at)?.to_string();
        let rarity = extract_field(card_no_line, RARITY, None, card_no_at)?.to_string();

        // 3. 卡号上方两行：日文名、英文名
        scanner.retreat(1)?;
        let jp = scanner.current_line()?.trim().to_string();
        scanner.retreat(1)?;
        let en = scanner.current_line()?.trim().to_string();
        let name = BilingualText { jp, en };

        // 4. 颜色 / 阵营 / 类型
        scanner.advance(3);
        let line = scanner.current_line()?;
        let at = scanner.line_number();
        let color: CardColor = decode_variant(extract_field(line, COLOR, Some(SIDE), at)?)?;
        let side: CardSide = decode_variant(extract_word(line, SIDE, at)?)?;
        let card_type: CardType = decode_variant(type_text(line, side, at)?)?;

        // 5. 数值行
        scanner.next_line();
        let mut record = CardRecord {
            serial,
            rarity,
            name,
            color,
            side,
            card_type,
            power: None,
            soul: None,
            level: None,
            cost: None,
            traits: Vec::new(),
            triggers: Vec::new(),
            flavor: String::new(),
            effect: Vec::new(),
            remarks: REMARKS.to_string(),
        };
        read_stats(&scanner, &mut record)?;

        // 6. 特征
        scanner.next_line();
        let at = scanner.line_number();
        let (traits, dropped) =
            parse_traits(extract_field(scanner.current_line()?, TRAITS, None, at)?);
        for entry in dropped {
            debug!(line = at, entry = %entry, "无效的特征，已跳过");
            self.warnings
                .push(format!("第 {} 行：无效的特征，已跳过: {}", at, entry));
        }
        record.traits = traits;

        // 7. 触发
        scanner.next_line();
        let at = scanner.line_number();
        let (triggers, dropped) =
            parse_triggers(extract_field(scanner.current_line()?, TRIGGERS, None, at)?);
        for token in dropped {
            debug!(line = at, token = %token, "无法识别的触发，已跳过");
            self.warnings
                .push(format!("第 {} 行：无法识别的触发，已跳过: {}", at, token));
        }
        record.triggers = triggers;

        // 8. 风味文本（可能跨行，直到 TEXT: 行）
        scanner.next_line();
        let at = scanner.line_number();
        let mut flavor = vec![extract_field(scanner.current_line()?, FLAVOR, None, at)?];
        scanner.next_line();
        loop {
            let line = scanner
                .current_line()
                .map_err(|_| ParseError::missing_label(RULES_TEXT, scanner.line_number()))?;
            if line.starts_with(RULES_TEXT) || line.trim_end() == RULES_TEXT.trim_end() {
                break;
            }
            flavor.push(line.trim());
            scanner.next_line();
        }
        record.flavor = flavor
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        // 9-10. 能力文本
        // 标签行只有 `TEXT:` 时，能力文本从下一行开始
        let at = scanner.line_number();
        if scanner.current_line()?.trim_end() == RULES_TEXT.trim_end() {
            scanner.next_line();
            record.effect = split_abilities(&scanner.remainder());
        } else {
            let rest = scanner.remainder();
            record.effect = split_abilities(extract_field(&rest, RULES_TEXT, None, at)?);
        }

        info!(serial = %record.serial, "卡片解析完成");
        Ok(record)
    }

    /// 获取最近一次解析的警告
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// 读取数值行：Character 读战力/魂，Character 与 Event 读等级/费用
fn read_stats(scanner: &LineScanner<'_>, record: &mut CardRecord) -> Result<(), ParseError> {
    let card_type = record.card_type;
    if !card_type.has_level_and_cost() {
        return Ok(());
    }

    let line = scanner.current_line()?;
    let at = scanner.line_number();
    let number = |start: &str, end: Option<&str>, field: &str| {
        parse_number(extract_field(line, start, end, at)?, field)
    };

    if card_type.has_power_and_soul() {
        record.power = Some(number(POWER, Some(SOUL), "power")?);
        record.soul = Some(number(SOUL, None, "soul")?);
    }
    record.level = Some(number(LEVEL, Some(COST), "level")?);
    record.cost = Some(number(COST, Some(POWER), "cost")?);

    Ok(())
}

/// 类型名位于阵营名之后（阵营名大小写不敏感地定位）
fn type_text(line: &str, side: CardSide, line_number: usize) -> Result<&str, ParseError> {
    let name = side.name();
    let pos = find_ignore_case(line, name)
        .ok_or_else(|| ParseError::missing_label(name, line_number))?;
    Ok(line[pos + name.len()..].trim())
}

/// 解析单个段落（不保留警告）
pub fn parse_section(text: &str) -> Result<CardRecord, ParseError> {
    Parser::new().parse_section(text)
}
