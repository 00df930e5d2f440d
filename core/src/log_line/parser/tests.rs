use super::*;
use chrono::NaiveDateTime;

fn observed() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}

// tokenize
#[test]
fn test_tokenize_ability_line() {
    let input = "21|2024-01-01T00:00:00.0000000+01:00|10001|Caster|2C|Vengeance|10002|Target|hash\r\n";
    let fields = tokenize(input);

    assert_eq!(fields.len(), 9);
    assert_eq!(fields[0], "21");
    assert_eq!(fields[3], "Caster");
    assert_eq!(fields[4], "2C");
    assert_eq!(fields[8], "hash", "trailing CRLF must be stripped");
}

#[test]
fn test_tokenize_empty_fields() {
    let fields = tokenize("21|||");
    assert_eq!(fields, vec!["21", "", "", ""]);
}

#[test]
fn test_tokenize_no_delimiter() {
    assert_eq!(tokenize("garbage"), vec!["garbage"]);
    assert_eq!(tokenize(""), vec![""]);
}

// parse_skill_usage
#[test]
fn test_rejects_empty_record() {
    let fields: Vec<&str> = Vec::new();
    assert!(parse_skill_usage(&fields, observed()).is_none());
}

#[test]
fn test_rejects_short_record() {
    let fields = ["21", "ts", "10001"];
    assert!(parse_skill_usage(&fields, observed()).is_none());
}

#[test]
fn test_rejects_wrong_type_tag() {
    let fields = ["99", "ts", "10001", "Caster", "2C", "Vengeance", "10002", "Target"];
    assert!(parse_skill_usage(&fields, observed()).is_none());

    // Cast-start records are not ability uses
    let fields = ["20", "ts", "10001", "Caster", "2C", "Vengeance", "10002", "Target"];
    assert!(parse_skill_usage(&fields, observed()).is_none());
}

#[test]
fn test_rejects_truncated_ability_record() {
    let fields = ["21", "ts", "10001", "Caster", "2C"];
    assert!(parse_skill_usage(&fields, observed()).is_none());
}

#[test]
fn test_rejects_non_hex_skill_id() {
    let fields = ["21", "ts", "10001", "Caster", "zz", "Name", "10002", "Target"];
    assert!(parse_skill_usage(&fields, observed()).is_none());
}

#[test]
fn test_rejects_unknown_skill_id() {
    // 0x1770 = 6000, well formed but not in the skill database
    let fields = ["21", "ts", "10001", "Caster", "1770", "Name", "10002", "Target"];
    assert!(parse_skill_usage(&fields, observed()).is_none());
}

#[test]
fn test_parses_ability_record() {
    // 0x2C = 44, Vengeance
    let fields = ["21", "ts", "10001", "Caster", "2C", "SkillName", "10002", "Target"];
    let result = parse_skill_usage(&fields, observed());
    assert!(result.is_some());

    let event = result.unwrap();
    assert_eq!(event.skill_id, 44);
    assert_eq!(event.caster_id, "10001");
    assert_eq!(event.caster_name, "Caster");
    assert_eq!(event.skill_name, "SkillName", "record-supplied name wins");
    assert_eq!(event.target_id, "10002");
    assert_eq!(event.target_name, "Target");
    assert_eq!(event.observed_at, observed());
}

#[test]
fn test_parses_aoe_record() {
    // 0x76 = 118, Battle Voice
    let fields = ["22", "ts", "10001", "Caster", "76", "", "10002", "Target"];
    let result = parse_skill_usage(&fields, observed());
    assert!(result.is_some());
    assert_eq!(result.unwrap().skill_id, 118);
}

#[test]
fn test_empty_skill_name_falls_back_to_database() {
    let fields = ["21", "ts", "10001", "Caster", "2C", "", "10002", "Target"];
    let event = parse_skill_usage(&fields, observed()).unwrap();
    assert_eq!(event.skill_name, "Vengeance");
}

#[test]
fn test_hex_parsing_is_case_insensitive() {
    // 0x5EDD = 24285, Haima
    let lower = ["21", "ts", "10001", "Caster", "5edd", "", "10002", "Target"];
    let upper = ["21", "ts", "10001", "Caster", "5EDD", "", "10002", "Target"];

    assert_eq!(parse_skill_usage(&lower, observed()).unwrap().skill_id, 24285);
    assert_eq!(parse_skill_usage(&upper, observed()).unwrap().skill_id, 24285);
}

// parse_primary_player
#[test]
fn test_parse_primary_player() {
    let fields = ["02", "ts", "10001", "Alma Seren"];
    assert_eq!(parse_primary_player(&fields), Some("Alma Seren"));
}

#[test]
fn test_parse_primary_player_rejects_other_records() {
    let fields = ["21", "ts", "10001", "Alma Seren"];
    assert_eq!(parse_primary_player(&fields), None);

    let short = ["02", "ts", "10001"];
    assert_eq!(parse_primary_player(&short), None);
}
