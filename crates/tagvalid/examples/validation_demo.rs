//! Validation Demo
//!
//! Validates a few signups and prints the resulting reports.
//! Run with `RUST_LOG=tagvalid=debug` to see per-field diagnostics, and set
//! `DEMO_JSON_LOGS=1` for JSON log output.

use tagvalid::{Record, ValidationOptions, Validator};
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Record, Debug)]
pub struct Signup {
    #[tag(validation = "req lenmin:3 lenmax:20", validation_regexp = "^[a-z0-9_]+$")]
    pub username: Option<String>,
    #[tag(validation = "req email")]
    pub email: Option<String>,
    #[tag(validation = "valmin:13 valmax:120")]
    pub age: u32,
    #[tag(validation_regexp = "^[A-Z]{2}$", checkout = "req")]
    pub country: Option<String>,
    #[tag(validation = "-")]
    pub referral_code: String,
}

fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    if std::env::var_os("DEMO_JSON_LOGS").is_some() {
        tracing_subscriber::registry()
            .with(filter)
            .with(Layer::new().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(Layer::new())
            .init();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging()?;

    let validator = Validator::new();

    let good = Signup {
        username: Some("ada_l".to_string()),
        email: Some("ada@example.com".to_string()),
        age: 36,
        country: Some("GB".to_string()),
        referral_code: String::new(),
    };

    let bad = Signup {
        username: Some("Ada Lovelace!".to_string()),
        email: None,
        age: 9,
        country: Some("Britain".to_string()),
        referral_code: "???".to_string(),
    };

    println!("Default rules");
    for signup in [&good, &bad] {
        let report = validator.validate_default(signup)?;
        println!("{report}");
    }

    println!("\nOnly the username and email fields");
    let options = ValidationOptions::builder()
        .restrict_to(["username", "email"])
        .build_options();
    println!("{}", validator.validate(&bad, &options)?);

    println!("\nChecking a corrected age without touching the record");
    let options = ValidationOptions::builder()
        .restrict_field("age")
        .overwrite_value("age", 21u32)
        .build_options();
    println!("{}", validator.validate(&bad, &options)?);

    println!("\nCheckout rules read from the `checkout` tag");
    let options = ValidationOptions::builder().tag("checkout").build_options();
    let missing_country = Signup {
        country: None,
        ..good
    };
    let report = validator.validate(&missing_country, &options)?;
    println!("{}", serde_json::to_string_pretty(&report.to_json())?);

    let stats = validator.pattern_cache().stats();
    println!(
        "\nPattern cache: {} compiled, {} hits, {} misses",
        stats.entries, stats.hits, stats.misses
    );

    Ok(())
}
