//! # Card 模块
//!
//! 定义卡片记录及其封闭取值集合（颜色、阵营、类型、触发）。
//!
//! ## 设计说明
//!
//! - 记录由解析器一次性构造，之后不再修改
//! - 数值字段使用 `Option`，缺失即 `None`，不使用 0 作为哨兵值
//! - 所有取值集合都实现 [`CardVariant`]，统一通过 [`decode_variant`] 解码

use serde::{Deserialize, Serialize};

use crate::error::{HotcError, ParseError};

/// 双语文本（日文 / 英文）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BilingualText {
    /// 日文
    pub jp: String,
    /// 英文
    pub en: String,
}

impl BilingualText {
    pub fn new(jp: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            jp: jp.into(),
            en: en.into(),
        }
    }
}

/// 封闭取值集合
///
/// 解码时按名称大小写不敏感匹配。
pub trait CardVariant: Sized + Copy + 'static {
    /// 集合名称（用于错误信息）
    const SET_NAME: &'static str;

    /// 集合中的全部成员
    fn all() -> &'static [Self];

    /// 成员的规范名称
    fn name(&self) -> &'static str;
}

/// 将去除空白后的文本解码为取值集合中的成员
pub fn decode_variant<T: CardVariant>(value: &str) -> Result<T, ParseError> {
    let value = value.trim();
    lookup_variant(value).ok_or_else(|| ParseError::Decode {
        value: value.to_string(),
        variant_set: T::SET_NAME.to_string(),
    })
}

/// 同 [`decode_variant`]，但匹配失败时返回 `None`
pub fn lookup_variant<T: CardVariant>(value: &str) -> Option<T> {
    let value = value.trim();
    T::all()
        .iter()
        .copied()
        .find(|v| v.name().eq_ignore_ascii_case(value))
}

/// 卡片颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Yellow,
    Green,
    Red,
    Blue,
    Purple,
}

impl CardVariant for CardColor {
    const SET_NAME: &'static str = "CardColor";

    fn all() -> &'static [Self] {
        &[
            Self::Yellow,
            Self::Green,
            Self::Red,
            Self::Blue,
            Self::Purple,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
        }
    }
}

/// 卡片阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSide {
    Weiss,
    Schwarz,
}

impl CardVariant for CardSide {
    const SET_NAME: &'static str = "CardSide";

    fn all() -> &'static [Self] {
        &[Self::Weiss, Self::Schwarz]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Weiss => "Weiss",
            Self::Schwarz => "Schwarz",
        }
    }
}

/// 卡片类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// 角色卡：有等级、费用、战力、魂
    Character,
    /// 事件卡：有等级、费用
    Event,
    /// 高潮卡：无数值字段
    Climax,
}

impl CardType {
    /// 是否带有等级/费用
    pub fn has_level_and_cost(&self) -> bool {
        matches!(self, Self::Character | Self::Event)
    }

    /// 是否带有战力/魂
    pub fn has_power_and_soul(&self) -> bool {
        matches!(self, Self::Character)
    }
}

impl CardVariant for CardType {
    const SET_NAME: &'static str = "CardType";

    fn all() -> &'static [Self] {
        &[Self::Character, Self::Event, Self::Climax]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Event => "Event",
            Self::Climax => "Climax",
        }
    }
}

/// 触发图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    Soul,
    Shot,
    Bounce,
    Choice,
    GoldBar,
    Bag,
    Door,
    Standby,
    Book,
    Gate,
}

impl CardVariant for Trigger {
    const SET_NAME: &'static str = "Trigger";

    fn all() -> &'static [Self] {
        &[
            Self::Soul,
            Self::Shot,
            Self::Bounce,
            Self::Choice,
            Self::GoldBar,
            Self::Bag,
            Self::Door,
            Self::Standby,
            Self::Book,
            Self::Gate,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Soul => "Soul",
            Self::Shot => "Shot",
            Self::Bounce => "Bounce",
            Self::Choice => "Choice",
            Self::GoldBar => "GoldBar",
            Self::Bag => "Bag",
            Self::Door => "Door",
            Self::Standby => "Standby",
            Self::Book => "Book",
            Self::Gate => "Gate",
        }
    }
}

/// 卡片记录
///
/// 每个段落解析出一条，所有权完整交给调用方。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// 卡号
    pub serial: String,
    /// 稀有度
    pub rarity: String,
    /// 卡名
    pub name: BilingualText,
    pub color: CardColor,
    pub side: CardSide,
    #[serde(rename = "type")]
    pub card_type: CardType,
    /// 仅 Character
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<u32>,
    /// 仅 Character
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soul: Option<u32>,
    /// Character / Event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Character / Event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    /// 特征
    pub traits: Vec<BilingualText>,
    pub triggers: Vec<Trigger>,
    /// 风味文本（多行已合并为单行）
    pub flavor: String,
    /// 能力文本，每个能力一条
    pub effect: Vec<String>,
    /// 来源说明
    pub remarks: String,
}

impl CardRecord {
    /// 序列化为 JSON 字符串
    pub fn to_json(&self) -> Result<String, HotcError> {
        serde_json::to_string_pretty(self).map_err(|e| HotcError::Json(e.to_string()))
    }

    /// 从 JSON 字符串反序列化
    pub fn from_json(json: &str) -> Result<Self, HotcError> {
        serde_json::from_str(json).map_err(|e| HotcError::Json(e.to_string()))
    }
}
