// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command line handling shared by both binaries.

use clap::{App, AppSettings, Arg, ArgMatches, ErrorKind};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::{RenderError, Result};

/// Largest accepted width or height.  Bounds the memory the raster
/// may take, nothing else.
pub const MAX_DIMENSION: i64 = 32000;

/// Upper limit on worker threads.
pub const MAX_WORKERS: usize = 1024;

const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const WORKERS: &str = "workers";
const OUTPUT: &str = "output";

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> std::result::Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

/// Everything a run needs to know.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Worker threads besides the coordinator.  Zero means the
    /// coordinator renders alone.
    pub workers: usize,
    /// Where the graymap goes.
    pub output: PathBuf,
}

/// The argument definitions.  `default_output` differs between the
/// dynamic and the sequential renderer.
pub fn app(name: &'static str, default_output: &'static str) -> App<'static, 'static> {
    App::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders the Mandelbrot set as a grayscale image")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name(WIDTH)
                .required(true)
                .index(1)
                .help("Width of the image, 1 to 32000"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .required(true)
                .index(2)
                .help("Height of the image, 1 to 32000"),
        )
        .arg(
            Arg::with_name(WORKERS)
                .required(false)
                .long(WORKERS)
                .short("w")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        MAX_WORKERS,
                        "Could not parse worker count",
                        &format!("Worker count must be between 0 and {}", MAX_WORKERS),
                    )
                })
                .help("Number of worker threads [default: one per cpu]"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value(default_output)
                .help("Output file"),
        )
}

fn dimension(matches: &ArgMatches, name: &str) -> Result<i64> {
    let raw = matches.value_of(name).unwrap_or("");
    i64::from_str(raw.trim())
        .map_err(|_| RenderError::InvalidInput(format!("{} is not a number: {:?}", name, raw)))
}

impl Config {
    /// Read a configuration from parsed arguments, rejecting any
    /// dimension outside [1, 32000].
    pub fn from_matches(matches: &ArgMatches, default_output: &str) -> Result<Config> {
        let width = dimension(matches, WIDTH)?;
        let height = dimension(matches, HEIGHT)?;
        if width < 1 || width > MAX_DIMENSION || height < 1 || height > MAX_DIMENSION {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let workers = match matches.value_of(WORKERS) {
            Some(w) => usize::from_str(w)
                .map_err(|_| RenderError::InvalidInput(format!("bad worker count: {:?}", w)))?,
            None => num_cpus::get(),
        };
        let output = PathBuf::from(matches.value_of(OUTPUT).unwrap_or(default_output));

        Ok(Config {
            width: width as usize,
            height: height as usize,
            workers,
            output,
        })
    }

    /// Parse a full argument list, program name first.  Help and
    /// version requests come back as `RenderError::Usage` carrying the
    /// text clap would have printed.
    pub fn from_args<I, T>(
        name: &'static str,
        default_output: &'static str,
        args: I,
    ) -> Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app(name, default_output)
            .get_matches_from_safe(args)
            .map_err(|e| match e.kind {
                ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => {
                    RenderError::Usage(e.message)
                }
                _ => RenderError::InvalidInput(e.message),
            })?;
        Config::from_matches(&matches, default_output)
    }
}

/// Print what went wrong with the command line, in the words the
/// renderers have always used.
pub fn explain<W: Write>(out: &mut W, err: &RenderError) -> io::Result<()> {
    match err {
        RenderError::Usage(text) => return writeln!(out, "{}", text),
        RenderError::InvalidDimensions { .. } => {
            writeln!(out, "ERROR: Invalid image dimensions.")?;
            writeln!(out, "Height and width range: [1,{}]", MAX_DIMENSION)?;
        }
        _ => {}
    }
    writeln!(out, "ERROR: Invalid input.")?;
    writeln!(out, "Arguments should be <width> <height>")?;
    writeln!(out, "Shutting down...")
}

/// Route `log` output to stderr, `warn` and above unless `RUST_LOG`
/// says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
