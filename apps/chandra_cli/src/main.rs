use chandra::{moon_reading, Ayanamsa, ChandraConfig, EphemerisEngine, MoonReading, SwissEphemerisAdapter};
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sidereal Moon sign, nakshatra and pada for a birth moment")]
struct Args {
    #[arg(long, help = "Birth date, YYYY-MM-DD")]
    date: NaiveDate,

    #[arg(long, value_parser = parse_clock, help = "Local birth time, HH:MM")]
    time: NaiveTime,

    #[arg(long, allow_hyphen_values = true, help = "UTC offset of the birth place, e.g. +05:30 or -7")]
    offset: String,

    #[arg(long)]
    ayanamsa: Option<Ayanamsa>,

    #[arg(long, help = "Swiss Ephemeris data directory")]
    ephe_path: Option<PathBuf>,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    json: bool,
}

fn parse_clock(text: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(text, "%H:%M").or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
}

fn render(reading: &MoonReading) -> String {
    let mut out = format!(
        "Birth: {} {} ({})\nUTC:   {}\n",
        reading.birth.date,
        reading.birth.time.format("%H:%M"),
        reading.birth.offset,
        reading.utc.format("%Y-%m-%d %H:%M"),
    );
    match (&reading.vedic, &reading.unavailable) {
        (Some(placement), _) => out.push_str(&format!("{}\n", placement)),
        (None, Some(reason)) => out.push_str(&format!("Vedic data omitted: {}\n", reason)),
        (None, None) => {}
    }
    out
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = ChandraConfig::load(args.config.as_deref())?;
    let ayanamsa = args.ayanamsa.unwrap_or(config.ephemeris.ayanamsa);

    let adapter = match SwissEphemerisAdapter::new(args.ephe_path.or(config.ephemeris.path)) {
        Ok(adapter) => Some(adapter),
        Err(e) => {
            log::warn!("Swiss Ephemeris unavailable: {}", e);
            None
        }
    };
    let engine = adapter.as_ref().map(|a| a as &dyn EphemerisEngine);

    let reading = moon_reading(args.date, args.time, &args.offset, engine, ayanamsa)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        print!("{}", render(&reading));
    }
    Ok(())
}
