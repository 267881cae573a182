use tagvalid::{Record, Validator};

#[derive(Record)]
pub struct Contact {
    #[tag(validation = "req lenmin:1 lenmax:64")]
    pub name: String,
    #[tag(validation = "email")]
    pub email: String,
    pub notes: Option<String>,
}

fn main() {
    let contact = Contact {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        notes: None,
    };

    let report = Validator::new().validate_default(&contact).unwrap();
    assert!(report.passed());
}
