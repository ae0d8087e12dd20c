//! Tests for posts-model types.

use posts_model::{NormalizedDate, Record, Token};

#[test]
fn token_rejects_empty() {
    assert!(Token::new("").is_none());
    let token = Token::new("كتاب").unwrap();
    assert_eq!(token.as_str(), "كتاب");
    assert_eq!(token, "كتاب");
}

#[test]
fn token_serializes_as_plain_string() {
    let tokens = vec![Token::new("مدرسة").unwrap(), Token::new("كبيرة").unwrap()];
    let json = serde_json::to_string(&tokens).expect("serialize tokens");
    assert_eq!(json, r#"["مدرسة","كبيرة"]"#);
}

#[test]
fn record_accessors() {
    let record = Record::new("Mon 12 Jan 2021-14:35", "نص");
    assert_eq!(record.date(), Some("Mon 12 Jan 2021-14:35"));
    assert_eq!(record.text(), Some("نص"));
    assert_eq!(Record::default().text(), None);
}

#[test]
fn normalized_date_serializes() {
    let date = NormalizedDate {
        weekday: "Mon".to_string(),
        day: "12".to_string(),
        month: "Jan".to_string(),
        year: "2021".to_string(),
        time: "14:35".to_string(),
        hour: 14,
    };
    let json = serde_json::to_value(&date).expect("serialize date");
    assert_eq!(json["hour"], 14);
    assert_eq!(json["year"], "2021");
}
