//! Twilio Values - command line inspector
//!
//! Runs a single decoder or formatter over values given on the command line,
//! which is handy for checking what a raw API value turns into.

use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use twilio_values::decode::{decode_duration, decode_null_time, decode_unsigned};
use twilio_values::{format_price, Config, PhoneNumber, Status};

const USAGE: &str = "usage: twilio-values <command> [args]

commands:
  phone <number>          canonical, friendly and local forms
  price <unit> <amount>   display form of an amount
  status <token>          friendly status label
  count <json>            decode a quoted counter, e.g. '\"3\"'
  duration <json>         decode quoted seconds, e.g. '\"42\"'
  time <json>             decode a nullable timestamp";

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr so stdout only carries results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Default region: {:?}", config.default_region);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = run(&config, &args);
    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}

fn run(config: &Config, args: &[&str]) -> Result<()> {
    match args {
        ["phone", raw] => {
            let phone = PhoneNumber::parse_in_region(raw, config.default_region)?;
            println!("canonical: {}", phone);
            println!("friendly:  {}", phone.friendly());
            println!("local:     {}", phone.local());
        }
        ["price", unit, amount] => println!("{}", format_price(unit, amount)),
        ["status", token] => println!("{}", Status::from(*token).friendly()),
        ["count", payload] => println!("{}", decode_unsigned(payload)?),
        ["duration", payload] => println!("{}s", decode_duration(payload)?.num_seconds()),
        ["time", payload] => match decode_null_time(Some(*payload))?.to_rfc3339() {
            Some(time) => println!("{}", time),
            None => println!("null"),
        },
        _ => bail!("{}", USAGE),
    }
    Ok(())
}
