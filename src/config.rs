use std::{ffi::OsString, path::PathBuf};

use clap::{value_t, App, Arg, ArgMatches, ErrorKind};

use crate::proc::{cell_count, DEFAULT_DENSITY};

/// Validated run settings taken from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub generations: u64,
    pub width: usize,
    pub height: usize,
    /// Probability in `[0, 1]` that a cell starts alive.
    pub density: f64,
    pub seed: Option<u64>,
    pub pattern: Option<PathBuf>,
    pub show: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            generations: 10,
            width: 25,
            height: 25,
            density: DEFAULT_DENSITY,
            seed: None,
            pattern: None,
            show: false,
        }
    }
}

pub fn app() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs Conway's Game of Life on a bounded board and reports how long it took")
        .arg(
            Arg::with_name("generations")
                .short("n")
                .takes_value(true)
                .value_name("INT")
                .default_value("10")
                .help("number of generations to run"),
        )
        .arg(
            Arg::with_name("width")
                .short("x")
                .takes_value(true)
                .value_name("INT")
                .default_value("25")
                .help("board width in cells"),
        )
        .arg(
            Arg::with_name("height")
                .short("y")
                .takes_value(true)
                .value_name("INT")
                .default_value("25")
                .help("board height in cells"),
        )
        .arg(
            Arg::with_name("percent")
                .short("p")
                .takes_value(true)
                .value_name("0-100")
                .default_value("50")
                .validator(is_percent)
                .help("percent of cells alive at the start"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .takes_value(true)
                .value_name("U64")
                .help("seed for the initial board, random when omitted"),
        )
        .arg(
            Arg::with_name("pattern")
                .long("pattern")
                .takes_value(true)
                .value_name("FILE")
                .help("read the initial board from a text pattern instead of randomizing"),
        )
        .arg(
            Arg::with_name("show")
                .long("show")
                .help("print every generation"),
        )
}

fn is_percent(v: String) -> Result<(), String> {
    match v.parse::<u8>() {
        Ok(p) if p <= 100 => Ok(()),
        _ => Err(format!("expected an integer between 0 and 100, got {v}")),
    }
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let percent = value_t!(matches, "percent", u8)?;
        let seed = if matches.is_present("seed") {
            Some(value_t!(matches, "seed", u64)?)
        } else {
            None
        };

        let width = value_t!(matches, "width", usize)?;
        let height = value_t!(matches, "height", usize)?;
        if cell_count(width, height).is_none() {
            return Err(clap::Error::with_description(
                &format!("a {width}x{height} board is too large"),
                ErrorKind::ValueValidation,
            ));
        }

        Ok(Settings {
            generations: value_t!(matches, "generations", u64)?,
            width,
            height,
            density: f64::from(percent) / 100.0,
            seed,
            pattern: matches.value_of_os("pattern").map(PathBuf::from),
            show: matches.is_present("show"),
        })
    }

    /// Parses `args`, the first item being the program name.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        Self::from_matches(&matches)
    }
}
