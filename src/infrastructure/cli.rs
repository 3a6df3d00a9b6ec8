use clap::Parser;

use crate::{core::state::Section, domain::ThemeMode, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 30.0,
        value_parser = parse_rate
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0,
        value_parser = parse_rate
    )]
    pub frame_rate: f64,

    #[arg(long, value_name = "MODE", help = "Initial theme: theatrical or tech")]
    pub theme: Option<ThemeMode>,

    #[arg(
        long,
        value_name = "CATEGORY",
        help = "Initial skills filter: all or a category such as ai-ml"
    )]
    pub filter: Option<String>,

    #[arg(
        long,
        value_name = "SECTION",
        help = "Section shown at startup: hero or skills"
    )]
    pub section: Option<Section>,
}

/// A finite rate above zero; the terminal turns it into an interval
fn parse_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("rate must be a positive number, got {value}"))
    }
}
