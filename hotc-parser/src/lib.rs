//! # HOTC Parser
//!
//! Heart of the Cards 翻译文本导出格式的卡片解析库。
//!
//! ## 架构概述
//!
//! `hotc-parser` 是纯逻辑核心，不负责下载页面或提取 HTML 中的文本。
//! 调用方交给它已经提取好的纯文本，它返回结构化的卡片记录：
//!
//! ```text
//! 文档文本 → [split_sections] → Vec<&str> → [Parser::parse_section] → CardRecord
//! ```
//!
//! ## 使用示例
//!
//! ```ignore
//! use hotc_parser::parse_document;
//!
//! for result in parse_document(&text) {
//!     match result {
//!         Ok(card) => println!("{}", card.serial),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```
//!
//! ## 模块结构
//!
//! - [`card`]：卡片记录与取值集合
//! - [`error`]：错误类型定义
//! - [`parser`]：单段落解析器
//! - [`section`]：文档切分与逐段解析

pub mod card;
pub mod error;
pub mod parser;
pub mod section;

// 重导出核心类型
pub use card::{
    BilingualText, CardColor, CardRecord, CardSide, CardType, CardVariant, Trigger,
    decode_variant, lookup_variant,
};
pub use error::{HotcError, HotcResult, ParseError, SectionError};
pub use parser::{Parser, REMARKS, parse_section};
pub use section::{SECTION_SEPARATOR, Sections, parse_all, parse_document, split_sections};
