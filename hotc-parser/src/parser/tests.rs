//! # Parser 测试
//!
//! 完整段落的解析测试。

use super::*;
use crate::card::{CardColor, CardType, Trigger};
use crate::section::{SECTION_SEPARATOR, parse_document};

const CHARACTER: &str = r#"
Sakura Kudo
工藤 叶
Card No.: DC/W01-001  Rarity: RR
Color: Yellow  Side: Weiss  Character
Level: 3  Cost: 2  Power: 10000  Soul: 2
Traits: 魔法 (Magic), 和菓子 (Japanese Sweets)
Triggers: Soul
Flavor: The cherry blossoms never wilt
on this island.
TEXT: [C] All of your other Characters get +500 Power.
[A] When this card attacks, this card gets +1 Soul
until end of turn.
[S] [(1)] Put this card into your waiting room.
"#;

const EVENT: &str = r#"
Memories of Spring
春の思い出
Card No.: DC/W01-050  Rarity: U
Color: Green  Side: Weiss  Event
Level: 1  Cost: 1  Power: -  Soul: -
Traits:
Triggers: None
Flavor:
TEXT: [C] Draw 2 cards.
"#;

const CLIMAX: &str = r#"
In a Dream
夢の中
Card No.: DC/W01-100  Rarity: CR
Color: Red  Side: schwarz  Climax
Level: -  Cost: -  Power: -  Soul: -
Traits:
Triggers: 2 Soul
Flavor: A dream
that spans
three lines
TEXT: [C] All of your Characters get +1000 Power and +1 Soul.
"#;

// -------------------------------------------------------------------------
// 按类型区分的字段
// -------------------------------------------------------------------------

#[test]
fn test_parse_character() {
    let card = parse_section(CHARACTER).unwrap();

    assert_eq!(card.serial, "DC/W01-001");
    assert_eq!(card.rarity, "RR");
    assert_eq!(card.name, BilingualText::new("工藤 叶", "Sakura Kudo"));
    assert_eq!(card.color, CardColor::Yellow);
    assert_eq!(card.side, CardSide::Weiss);
    assert_eq!(card.card_type, CardType::Character);
    assert_eq!(card.power, Some(10000));
    assert_eq!(card.soul, Some(2));
    assert_eq!(card.level, Some(3));
    assert_eq!(card.cost, Some(2));
    assert_eq!(
        card.traits,
        vec![
            BilingualText::new("魔法", "Magic"),
            BilingualText::new("和菓子", "Japanese Sweets"),
        ]
    );
    assert_eq!(card.triggers, vec![Trigger::Soul]);
    assert_eq!(card.remarks, REMARKS);
}

#[test]
fn test_character_snapshot() {
    let record = parse_section(CHARACTER).unwrap();
    insta::assert_debug_snapshot!("character_card", record);
}

#[test]
fn test_parse_event_has_level_and_cost_only() {
    let card = parse_section(EVENT).unwrap();

    assert_eq!(card.card_type, CardType::Event);
    assert_eq!(card.level, Some(1));
    assert_eq!(card.cost, Some(1));
    assert_eq!(card.power, None);
    assert_eq!(card.soul, None);
    assert!(card.traits.is_empty());
    assert!(card.triggers.is_empty());
    assert_eq!(card.flavor, "");
    assert_eq!(card.effect, vec!["[CONT] Draw 2 cards.".to_string()]);
}

#[test]
fn test_parse_climax_has_no_numbers() {
    let card = parse_section(CLIMAX).unwrap();

    assert_eq!(card.side, CardSide::Schwarz);
    assert_eq!(card.card_type, CardType::Climax);
    assert_eq!(card.level, None);
    assert_eq!(card.cost, None);
    assert_eq!(card.power, None);
    assert_eq!(card.soul, None);
    assert_eq!(card.triggers, vec![Trigger::Soul, Trigger::Soul]);
}

// -------------------------------------------------------------------------
// 多行文本
// -------------------------------------------------------------------------

#[test]
fn test_multi_line_flavor_is_space_joined() {
    let card = parse_section(CLIMAX).unwrap();
    assert_eq!(card.flavor, "A dream that spans three lines");
    assert!(!card.flavor.contains('\n'));

    let card = parse_section(CHARACTER).unwrap();
    assert_eq!(card.flavor, "The cherry blossoms never wilt on this island.");
}

#[test]
fn test_effect_entries_are_normalized() {
    let card = parse_section(CHARACTER).unwrap();
    assert_eq!(
        card.effect,
        vec![
            "[CONT] All of your other Characters get +500 Power.".to_string(),
            "[AUTO] When this card attacks, this card gets +1 Soul until end of turn.".to_string(),
            "[ACT] [(1)] Put this card into your waiting room.".to_string(),
        ]
    );
    for entry in &card.effect {
        assert!(!entry.is_empty());
        assert_eq!(entry.trim(), entry);
        assert!(!entry.contains('\n'));
    }
}

#[test]
fn test_crlf_section() {
    let crlf = CHARACTER.replace('\n', "\r\n");
    let card = parse_section(&crlf).unwrap();
    assert_eq!(card, parse_section(CHARACTER).unwrap());
}

#[test]
fn test_parse_is_idempotent() {
    let mut parser = Parser::new();
    let first = parser.parse_section(CHARACTER).unwrap();
    let second = parser.parse_section(CHARACTER).unwrap();
    assert_eq!(first, second);
}

// -------------------------------------------------------------------------
// 警告
// -------------------------------------------------------------------------

#[test]
fn test_invalid_traits_and_triggers_become_warnings() {
    let text = CHARACTER
        .replace("Traits: 魔法 (Magic), ", "Traits: 魔法 (Magic), NoParen, ")
        .replace("Triggers: Soul", "Triggers: Soul Sparkle");

    let mut parser = Parser::new();
    let card = parser.parse_section(&text).unwrap();

    assert_eq!(card.traits.len(), 2);
    assert_eq!(card.triggers, vec![Trigger::Soul]);
    assert_eq!(parser.warnings().len(), 2);
    assert!(parser.warnings()[0].contains("NoParen"));
    assert!(parser.warnings()[1].contains("Sparkle"));

    // 下一次解析会清空警告
    parser.parse_section(CHARACTER).unwrap();
    assert!(parser.warnings().is_empty());
}

// -------------------------------------------------------------------------
// 错误
// -------------------------------------------------------------------------

#[test]
fn test_missing_card_no() {
    let text = CHARACTER.replace("Card No.: ", "Card Number: ");
    let err = parse_section(&text).unwrap_err();
    assert!(matches!(err, ParseError::MissingLabel { ref marker, .. } if marker == CARD_NO));
}

#[test]
fn test_missing_rarity() {
    let text = CHARACTER.replace("Rarity: RR", "RR");
    let err = parse_section(&text).unwrap_err();
    assert!(matches!(err, ParseError::MissingLabel { ref marker, line: 4 } if marker == RARITY));
}

#[test]
fn test_bad_power_is_fatal() {
    let text = CHARACTER.replace("Power: 10000", "Power: lots");
    let err = parse_section(&text).unwrap_err();
    assert_eq!(
        err,
        ParseError::NumericParse {
            value: "lots".to_string(),
            field: "power".to_string(),
        }
    );
}

#[test]
fn test_bad_event_level_is_fatal() {
    let text = EVENT.replace("Level: 1", "Level: ?");
    let err = parse_section(&text).unwrap_err();
    assert!(matches!(err, ParseError::NumericParse { ref field, .. } if field == "level"));
}

#[test]
fn test_unknown_color_is_fatal() {
    let text = CHARACTER.replace("Color: Yellow", "Color: Orange");
    let err = parse_section(&text).unwrap_err();
    assert_eq!(
        err,
        ParseError::Decode {
            value: "Orange".to_string(),
            variant_set: "CardColor".to_string(),
        }
    );
}

#[test]
fn test_unknown_type_is_fatal() {
    let text = CHARACTER.replace("Weiss  Character", "Weiss  Partner");
    let err = parse_section(&text).unwrap_err();
    assert!(matches!(err, ParseError::Decode { ref variant_set, .. } if variant_set == "CardType"));
}

#[test]
fn test_missing_rules_text() {
    let text = CLIMAX.replace("TEXT: ", "");
    let err = parse_section(&text).unwrap_err();
    assert!(matches!(err, ParseError::MissingLabel { ref marker, .. } if marker == RULES_TEXT));
}

#[test]
fn test_bare_rules_text_label() {
    let text = EVENT.replace("TEXT: [C] Draw 2 cards.", "TEXT:");
    let card = parse_section(&text).unwrap();
    assert!(card.effect.is_empty());
}

#[test]
fn test_bare_rules_text_label_with_abilities_below() {
    let text = EVENT.replace(
        "TEXT: [C] Draw 2 cards.",
        "TEXT:\n[C] Draw 2 cards.\n[A] Then discard a card.",
    );
    let card = parse_section(&text).unwrap();
    assert_eq!(
        card.effect,
        vec![
            "[CONT] Draw 2 cards.".to_string(),
            "[AUTO] Then discard a card.".to_string(),
        ]
    );
}

#[test]
fn test_card_no_on_first_line_has_no_name() {
    let err = parse_section("Card No.: X/Y-001  Rarity: C").unwrap_err();
    assert!(matches!(err, ParseError::OutOfRange { .. }));
}

// -------------------------------------------------------------------------
// 整个文档
// -------------------------------------------------------------------------

#[test]
fn test_parse_document_keeps_order_and_isolates_failures() {
    let broken = CHARACTER.replace("Soul: 2", "Soul: x");
    let document = [
        "Heart of the Cards translations",
        CHARACTER,
        broken.as_str(),
        CLIMAX,
        "footer",
    ]
    .join(SECTION_SEPARATOR);

    let results: Vec<_> = parse_document(&document).collect();
    assert_eq!(results.len(), 3);

    assert_eq!(results[0].as_ref().unwrap().serial, "DC/W01-001");
    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.index, 1);
    assert!(matches!(&err.source, ParseError::NumericParse { field, .. } if field == "soul"));
    assert_eq!(results[2].as_ref().unwrap().serial, "DC/W01-100");
}

#[test]
fn test_parse_document_fail_fast_by_collect() {
    let broken = EVENT.replace("Color: Green", "Color: Pink");
    let document = ["header", EVENT, broken.as_str(), CHARACTER, "footer"].join(SECTION_SEPARATOR);

    let collected: Result<Vec<_>, _> = parse_document(&document).collect();
    let err = collected.unwrap_err();
    assert_eq!(err.index, 1);
}

#[test]
fn test_section_warnings_are_prefixed() {
    let noisy = EVENT.replace("Triggers: None", "Triggers: Sparkle");
    let document = ["header", EVENT, noisy.as_str(), "footer"].join(SECTION_SEPARATOR);

    let mut sections = parse_document(&document);
    assert!(sections.next().unwrap().is_ok());
    assert!(sections.warnings().is_empty());
    assert!(sections.next().unwrap().is_ok());
    assert_eq!(sections.warnings().len(), 1);
    assert!(sections.warnings()[0].starts_with("段落 1"));
}
