use tagvalid::{Record, ValidationOptions, Validator, ViolationCode};

#[derive(Record)]
pub struct Login<'a> {
    #[tag(validation = "req email")]
    pub email: &'a str,
    #[tag(validation = "lenmin:8")]
    pub password: Option<&'a str>,
}

fn main() {
    let input = String::from("user@example.com secret");
    let (email, password) = input.split_once(' ').unwrap();
    let login = Login {
        email,
        password: Some(password),
    };

    let report = Validator::new().validate_default(&login).unwrap();
    assert_eq!(report.violation("password"), Some(ViolationCode::LEN_MIN));

    let options = ValidationOptions::builder()
        .overwrite_value("password", Some("long enough"))
        .build_options();
    assert!(Validator::new().validate(&login, &options).unwrap().passed());
}
