#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer with dynamic load balancing
//!
//! The Mandelbrot set is cheap to describe and expensive to draw
//! unevenly.  A point far outside the set leaves the circle of radius
//! two after a step or two; a point inside never leaves, and costs the
//! full iteration budget.  A row of the image that crosses the black
//! heart of the set can therefore cost hundreds of times as much as a
//! row along the top edge.
//!
//! Carving the rows into equal slabs, one per thread, leaves the
//! threads with the edges of the image idle while the ones holding the
//! middle grind on.  Instead a single coordinator hands out one row at
//! a time: every worker starts with one row, and whenever a worker
//! returns its row it is immediately given the next unassigned one,
//! or told to stop if none remain.  Rows come back in whatever order
//! they finish and are stored by index.
//!
//! The scheduler's bookkeeping (`scheduler`) is kept apart from the
//! threads and channels that carry its messages (`pool`), joined by the
//! `Transport` trait in `coordinator`.

extern crate clap;
extern crate crossbeam;
extern crate env_logger;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod config;
pub mod coordinator;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod pool;
pub mod protocol;
pub mod raster;
pub mod report;
pub mod scheduler;
pub mod sequential;
pub mod worker;

pub use coordinator::{Coordinator, Transport};
pub use errors::RenderError;
pub use planes::PlaneMapper;
pub use pool::render_dynamic;
pub use raster::Raster;
pub use sequential::{render_pixels, render_sequential};
