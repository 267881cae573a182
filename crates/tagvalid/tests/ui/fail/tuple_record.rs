use tagvalid::Record;

#[derive(Record)]
pub struct Point(pub i32, pub i32);

fn main() {
    let point = Point(1, 2);
    let _ = point.0 + point.1;
}
