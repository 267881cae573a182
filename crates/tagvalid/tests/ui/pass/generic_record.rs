use tagvalid::{Record, ToFieldValue, Validator};

#[derive(Record)]
pub struct Labelled<T>
where
    T: ToFieldValue + 'static,
{
    #[tag(validation = "lenmin:1")]
    pub label: String,
    #[tag(validation = "req")]
    pub value: Option<T>,
}

fn main() {
    let labelled = Labelled {
        label: "count".to_string(),
        value: Some(3u32),
    };

    let report = Validator::new().validate_default(&labelled).unwrap();
    assert!(report.passed());
}
