use numalchemy_generate::logging::init_logging;
use numalchemy_generate::{GenerateOptions, NumberFactory, parse_constraints};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = GenerateOptions::from_toml_str("seed = 2024\n")?;
    init_logging(options.log_format)?;

    let constraints = parse_constraints(
        r#"{"kind": "decimal", "gt": "0", "le": "500", "max_digits": 5, "decimal_places": 2}"#,
    )?;
    let mut factory = NumberFactory::new(options);
    for value in factory.batch(&constraints, 5)? {
        println!("{value}");
    }
    Ok(())
}
