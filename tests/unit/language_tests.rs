/*!
 * Tests for the supported language set
 */

use palavra::language::Language;

/// Test parsing of supported wire identifiers
#[test]
fn test_fromStr_withSupportedIdentifiers_shouldParse() {
    assert_eq!("english".parse::<Language>().unwrap(), Language::English);
    assert_eq!("french".parse::<Language>().unwrap(), Language::French);
    assert_eq!("spanish".parse::<Language>().unwrap(), Language::Spanish);
    assert_eq!("chinese".parse::<Language>().unwrap(), Language::Chinese);
    assert_eq!("italian".parse::<Language>().unwrap(), Language::Italian);

    // Case and whitespace tolerance
    assert_eq!(" French ".parse::<Language>().unwrap(), Language::French);
    assert_eq!("CHINESE".parse::<Language>().unwrap(), Language::Chinese);
}

/// Test rejection of identifiers outside the closed set
#[test]
fn test_fromStr_withUnsupportedIdentifier_shouldError() {
    assert!("klingon".parse::<Language>().is_err());
    assert!("portuguese".parse::<Language>().is_err());
    assert!("".parse::<Language>().is_err());
    assert!("fr".parse::<Language>().is_err());
}

/// Test that every variant round-trips through its identifier
#[test]
fn test_identifier_roundTrip_shouldMatchVariant() {
    for language in Language::ALL {
        let parsed: Language = language.identifier().parse().unwrap();
        assert_eq!(parsed, language);
    }
}

/// Test the static table name mapping
#[test]
fn test_tableName_shouldEqualIdentifier() {
    for language in Language::ALL {
        assert_eq!(language.table_name(), language.identifier());
    }
}

/// Test display names used in prompts
#[test]
fn test_displayName_shouldBeCapitalized() {
    assert_eq!(Language::English.display_name(), "English");
    assert_eq!(Language::Chinese.display_name(), "Chinese");
}

/// Test the logographic special case marker
#[test]
fn test_wantsTransliteration_shouldOnlyApplyToChinese() {
    assert!(Language::Chinese.wants_transliteration());
    assert!(!Language::English.wants_transliteration());
    assert!(!Language::French.wants_transliteration());
    assert!(!Language::Spanish.wants_transliteration());
    assert!(!Language::Italian.wants_transliteration());
}

/// Test serde serialization to wire identifiers
#[test]
fn test_serde_shouldUseLowercaseIdentifiers() {
    let json = serde_json::to_string(&Language::French).unwrap();
    assert_eq!(json, "\"french\"");

    let parsed: Language = serde_json::from_str("\"chinese\"").unwrap();
    assert_eq!(parsed, Language::Chinese);

    assert!(serde_json::from_str::<Language>("\"klingon\"").is_err());
}
