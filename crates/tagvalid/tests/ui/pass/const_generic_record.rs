use tagvalid::{Record, Validator};

#[derive(Record)]
pub struct Batch<const N: usize> {
    #[tag(validation = "lenmin:1")]
    pub name: String,
    pub items: [u32; N],
}

fn main() {
    let small = Batch::<2> {
        name: "small".to_string(),
        items: [1, 2],
    };
    let large = Batch::<8> {
        name: "large".to_string(),
        items: [0; 8],
    };

    assert!(!std::ptr::eq(small.descriptors(), large.descriptors()));
    assert!(Validator::new().validate_default(&small).unwrap().passed());
    assert!(Validator::new().validate_default(&large).unwrap().passed());
}
