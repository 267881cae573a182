use tagvalid::Record;

#[derive(Record)]
pub struct Signup {
    #[tag(validation::extra = "req")]
    pub email: String,
}

fn main() {
    let signup = Signup {
        email: "user@example.com".to_string(),
    };
    let _ = signup.email;
}
