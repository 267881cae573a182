use tagvalid::Record;

#[derive(Record)]
pub enum Status {
    Active,
    Disabled,
}

fn main() {
    let _ = [Status::Active, Status::Disabled];
}
