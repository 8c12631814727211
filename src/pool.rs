// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A pool of worker threads reached over crossbeam channels.  Each
//! worker has its own assignment channel; all of them share a single
//! result channel, which is the coordinator's "receive from anyone".

use crossbeam::channel::{unbounded, Receiver, Sender};
use log::{debug, info};

use crate::coordinator::{Coordinator, Transport};
use crate::errors::{RenderError, Result};
use crate::planes::PlaneMapper;
use crate::protocol::{Assignment, RowResult, WorkerId};
use crate::raster::Raster;
use crate::sequential::render_sequential;
use crate::worker::work;

/// The coordinator's end of the channels.
pub struct ThreadPool {
    assignments: Vec<Sender<Assignment>>,
    results: Receiver<RowResult>,
}

impl Transport for ThreadPool {
    fn pool_size(&self) -> usize {
        self.assignments.len()
    }

    fn send(&mut self, worker: WorkerId, assignment: Assignment) -> Result<()> {
        let channel = self.assignments.get(worker.0).ok_or_else(|| {
            RenderError::ProtocolViolation(format!("no such worker: {}", worker))
        })?;
        channel
            .send(assignment)
            .map_err(|_| RenderError::Disconnected(format!("{} has exited", worker)))
    }

    fn recv(&mut self) -> Result<RowResult> {
        self.results
            .recv()
            .map_err(|_| RenderError::Disconnected("every worker has exited".to_string()))
    }
}

/// Render the plane with `workers` threads fed one row at a time.
/// With no workers at all the calling thread renders the image itself.
/// Returns only after every worker thread has exited.
pub fn render_dynamic(plane: &PlaneMapper, workers: usize) -> Result<Raster> {
    if workers == 0 {
        info!("no workers in the pool; rendering on the coordinator");
        return Ok(render_sequential(plane));
    }

    let outcome = crossbeam::scope(|spawner| {
        let (result_tx, result_rx) = unbounded();
        let mut assignments = Vec::with_capacity(workers);
        let mut handles = Vec::with_capacity(workers);
        for index in 0..workers {
            let (tx, rx) = unbounded();
            let results = result_tx.clone();
            assignments.push(tx);
            handles.push(spawner.spawn(move |_| work(WorkerId(index), plane, rx, results)));
        }
        drop(result_tx);

        let mut pool = ThreadPool {
            assignments,
            results: result_rx,
        };
        let raster = Coordinator::new(plane.width(), plane.height(), workers).run(&mut pool);

        // Hanging up releases any worker still waiting after a failed run.
        drop(pool);
        for (index, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(rows) => debug!("{} rendered {} rows", WorkerId(index), rows),
                Err(_) => {
                    return Err(RenderError::Disconnected(format!(
                        "{} panicked",
                        WorkerId(index)
                    )))
                }
            }
        }
        raster
    });

    match outcome {
        Ok(raster) => raster,
        Err(_) => Err(RenderError::Disconnected(
            "a worker thread panicked".to_string(),
        )),
    }
}
