use std::net::IpAddr;

use tagvalid::{Record, Validator, ViolationCode};

pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Record)]
pub struct Device {
    #[tag(validation = "lenmin:1")]
    pub name: String,
    #[tag(opaque)]
    pub address: IpAddr,
    #[tag(opaque, validation = "email")]
    pub color: Color,
}

fn main() {
    let device = Device {
        name: "router".to_string(),
        address: IpAddr::from([127, 0, 0, 1]),
        color: Color { r: 0, g: 0, b: 0 },
    };

    let report = Validator::new().validate_default(&device).unwrap();
    assert_eq!(report.violation("address"), None);
    assert_eq!(report.violation("color"), Some(ViolationCode::TYPE));
    assert_eq!(device.color.r + device.color.g + device.color.b, 0);
}
