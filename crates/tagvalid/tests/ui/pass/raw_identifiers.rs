use tagvalid::{Record, Validator, ViolationCode};

#[derive(Record)]
pub struct r#Match {
    #[tag(validation = "lenmin:2")]
    pub r#type: String,
    #[tag(validation = "valmin:1")]
    pub r#ref: u32,
}

fn main() {
    let record = r#Match {
        r#type: "a".to_string(),
        r#ref: 0,
    };

    assert_eq!(record.record_name(), "Match");
    let report = Validator::new().validate_default(&record).unwrap();
    assert_eq!(report.violation("type"), Some(ViolationCode::LEN_MIN));
    assert_eq!(report.violation("ref"), Some(ViolationCode::VAL_MIN));
}
