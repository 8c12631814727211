// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Renders the Mandelbrot set with rows handed out one at a time to a
//! pool of worker threads, and writes it to `dynamic.pgm`.

extern crate log;
extern crate mandelrow;

use log::error;
use std::io;
use std::process;
use std::time::Instant;

use mandelrow::config::{explain, init_logging, Config};
use mandelrow::report::report;
use mandelrow::{render_dynamic, PlaneMapper};

const NAME: &str = "mandel_dynamic";
const OUTPUT: &str = "dynamic.pgm";

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
    let raster = match render_dynamic(&plane, config.workers) {
        Ok(raster) => raster,
        Err(e) => {
            error!("render failure: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if let Err(e) = report(
        &mut io::stdout(),
        elapsed,
        &config.output,
        raster.pixels(),
        (raster.width(), raster.height()),
    ) {
        error!("could not write report: {}", e);
        process::exit(1);
    }
}
