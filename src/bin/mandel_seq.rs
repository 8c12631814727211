// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The single-threaded baseline.  Same arguments, same kernel, no
//! workers (`--workers` is accepted and ignored); writes
//! `sequential.pgm`.

extern crate log;
extern crate mandelrow;

use log::error;
use std::io;
use std::process;
use std::time::Instant;

use mandelrow::config::{explain, init_logging, Config};
use mandelrow::report::report;
use mandelrow::{render_pixels, PlaneMapper};

const NAME: &str = "mandel_seq";
const OUTPUT: &str = "sequential.pgm";

fn main() {
    init_logging();

    let config = match Config::from_args(NAME, OUTPUT, std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            let _ = explain(&mut io::stdout(), &e);
            process::exit(0);
        }
    };

    let plane = PlaneMapper::new(config.width, config.height);
    println!("width x height = {} x {}", config.width, config.height);

    let start = Instant::now();
    let pixels = render_pixels(&plane);
    let elapsed = start.elapsed();

    if let Err(e) = report(
        &mut io::stdout(),
        elapsed,
        &config.output,
        &pixels,
        (config.width, config.height),
    ) {
        error!("could not write report: {}", e);
        process::exit(1);
    }
}
