use clap::{
    builder::{styling::AnsiColor, Styles},
    Parser, Subcommand,
};
use qibla::{CoordinateInput, DmsFields};

const ABOUT: &str = "Qibla direction finder";

const LONG_ABOUT: &str = "
Computes the initial great-circle bearing from the given position to the Kaaba in Mecca
and names the closest of the 16 compass points.

The bearing is measured clockwise from the TRUE north (not the magnetic one).
Longitudes outside of [-180, 180] are wrapped around. Invalid input prints placeholders
and exits with a failure status.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(name = "qibla", version, styles = STYLES, about = ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// More logging on stderr (-v for debug, -vv for trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decimal degrees, negative for the south and the west (e.g. 40.7128 -74.0060)
    #[command(allow_negative_numbers = true)]
    Decimal {
        /// Latitude in decimal degrees
        latitude: String,
        /// Longitude in decimal degrees
        longitude: String,
    },

    /// Degrees, minutes, seconds and hemisphere letter (e.g. --lat 21 25 21 N --lon 39 49 34.32 E)
    #[command(allow_negative_numbers = true)]
    Dms {
        /// Latitude parts
        #[arg(long, required = true, num_args = 4, value_names = ["DEG", "MIN", "SEC", "N|S"])]
        lat: Vec<String>,
        /// Longitude parts
        #[arg(long, required = true, num_args = 4, value_names = ["DEG", "MIN", "SEC", "E|W"])]
        lon: Vec<String>,
    },

    /// Each angle as a single DMS string (e.g. "21°25′21″N" "39°49′34.32″E")
    #[command(allow_negative_numbers = true)]
    Notation {
        /// Latitude, like 21°25′21″N or 21*25'21"N
        latitude: String,
        /// Longitude, like 39°49′34.32″E or 39 49 34.32 E
        longitude: String,
    },
}

impl Command {
    /// Raw values to hand over to the calculation
    pub fn input(&self) -> CoordinateInput<'_> {
        match self {
            Self::Decimal {
                latitude,
                longitude,
            } => CoordinateInput::Decimal {
                latitude: latitude.as_str(),
                longitude: longitude.as_str(),
            },
            Self::Dms { lat, lon } => CoordinateInput::Dms {
                latitude: dms_fields(lat),
                longitude: dms_fields(lon),
            },
            Self::Notation {
                latitude,
                longitude,
            } => CoordinateInput::Notation {
                latitude: latitude.as_str(),
                longitude: longitude.as_str(),
            },
        }
    }
}

fn dms_fields(parts: &[String]) -> DmsFields<'_> {
    let part = |i: usize| parts.get(i).map_or("", String::as_str);
    DmsFields::new(part(0), part(1), part(2), part(3))
}
