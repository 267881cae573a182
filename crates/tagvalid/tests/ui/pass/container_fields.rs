use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet, VecDeque};

use tagvalid::{Record, Validator, ViolationCode};

#[derive(Record)]
pub struct Shipment {
    pub codes: [u8; 4],
    pub labels: HashSet<String>,
    pub zones: BTreeSet<u16>,
    pub stops: VecDeque<String>,
    pub dimensions: (u32, u32, u32),
    #[tag(validation = "lenmin:3")]
    pub carrier: Cow<'static, str>,
    #[tag(validation = "valmin:1")]
    pub tracking: i128,
    #[tag(validation = "valmax:1000")]
    pub weight: u128,
    #[tag(validation = "req")]
    pub notes: Option<Vec<String>>,
}

fn main() {
    let shipment = Shipment {
        codes: [1, 2, 3, 4],
        labels: HashSet::new(),
        zones: BTreeSet::new(),
        stops: VecDeque::new(),
        dimensions: (10, 20, 30),
        carrier: Cow::Borrowed("DHL"),
        tracking: 1,
        weight: 1001,
        notes: None,
    };

    let report = Validator::new().validate_default(&shipment).unwrap();
    assert_eq!(report.violation("weight"), Some(ViolationCode::VAL_MAX));
    assert_eq!(report.violation("notes"), Some(ViolationCode::REQ));
    assert_eq!(report.len(), 2);
}
