// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The coordinator drives a `RowScheduler` over some way of talking to
//! workers.  The `Transport` trait is that way; the threaded pool is
//! one, and the tests bring their own.

use log::{debug, info};

use crate::errors::{RenderError, Result};
use crate::protocol::{Assignment, RowResult, WorkerId};
use crate::raster::Raster;
use crate::scheduler::RowScheduler;

/// Point-to-point delivery between the coordinator and a fixed pool
/// of workers.
pub trait Transport {
    /// Number of workers reachable through this transport.
    fn pool_size(&self) -> usize;

    /// Deliver a message to one worker.
    fn send(&mut self, worker: WorkerId, assignment: Assignment) -> Result<()>;

    /// Block until any worker hands back a row.
    fn recv(&mut self) -> Result<RowResult>;
}

/// Owns the raster and the scheduler for the length of one run.
pub struct Coordinator {
    scheduler: RowScheduler,
    raster: Raster,
}

impl Coordinator {
    /// A coordinator for an image of the given size, spread over
    /// `workers` workers.
    pub fn new(width: usize, height: usize, workers: usize) -> Coordinator {
        Coordinator {
            scheduler: RowScheduler::new(height, workers),
            raster: Raster::new(width, height),
        }
    }

    /// Run to completion.  Every worker receives `Terminate` exactly
    /// once before this returns.  With an empty pool nothing is
    /// assigned and the raster comes back empty.
    pub fn run<T: Transport>(mut self, transport: &mut T) -> Result<Raster> {
        if transport.pool_size() != self.scheduler.workers() {
            return Err(RenderError::ProtocolViolation(format!(
                "transport has {} workers, scheduler expects {}",
                transport.pool_size(),
                self.scheduler.workers()
            )));
        }
        if self.scheduler.workers() == 0 {
            return Ok(self.raster);
        }

        info!(
            "distributing {} rows over {} workers",
            self.raster.height(),
            self.scheduler.workers()
        );
        for (worker, assignment) in self.scheduler.prime()? {
            debug!("{} <- {:?}", worker, assignment);
            transport.send(worker, assignment)?;
        }

        while !self.scheduler.is_finished() {
            let RowResult {
                worker,
                row,
                pixels,
            } = transport.recv()?;
            let next = self.scheduler.complete(worker, row)?;
            self.raster.insert_row(row, &pixels)?;
            debug!("{} -> row {}, {} <- {:?}", worker, row, worker, next);
            transport.send(worker, next)?;
        }

        debug_assert!(self.scheduler.all_terminated());
        debug_assert!(self.raster.is_complete());
        info!("all {} rows received", self.raster.height());
        Ok(self.raster)
    }
}
