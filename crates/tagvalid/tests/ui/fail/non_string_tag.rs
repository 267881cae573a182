use tagvalid::Record;

#[derive(Record)]
pub struct Account {
    #[tag(validation = 5)]
    pub age: u32,
}

fn main() {
    let account = Account { age: 30 };
    let _ = account.age;
}
