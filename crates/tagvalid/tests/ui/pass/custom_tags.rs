use tagvalid::{Record, ValidationOptions, Validator};

#[derive(Record)]
pub struct Parcel {
    #[tag(shipping = "req", shipping_regexp = "^[0-9]{2}-[0-9]{3}$")]
    #[tag(validation = "-")]
    pub post_code: Option<Box<String>>,
    #[tag(shipping = "valmin:1 valmax:30")]
    pub weight_kg: f32,
    internal_id: u64,
}

fn main() {
    let parcel = Parcel {
        post_code: Some(Box::new("43-155".to_string())),
        weight_kg: 2.5,
        internal_id: 7,
    };

    let options = ValidationOptions::builder().tag("shipping").build_options();
    let report = Validator::new().validate(&parcel, &options).unwrap();
    assert!(report.passed());
    assert_eq!(parcel.internal_id, 7);
}
