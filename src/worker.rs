// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The worker loop.  A worker never speaks first: it waits for an
//! assignment, renders that row, sends it back, and waits again.

use crossbeam::channel::{Receiver, Sender};
use log::{debug, trace};

use crate::escape::render_row;
use crate::planes::PlaneMapper;
use crate::protocol::{Assignment, RowResult, WorkerId};

/// Serve assignments until told to stop.  Returns the number of rows
/// rendered.  A coordinator that hangs up counts as a stop.
pub fn work(
    id: WorkerId,
    plane: &PlaneMapper,
    assignments: Receiver<Assignment>,
    results: Sender<RowResult>,
) -> usize {
    let mut rendered = 0;
    loop {
        match assignments.recv() {
            Ok(Assignment::Row(row)) => {
                trace!("{} rendering row {}", id, row);
                let mut pixels = vec![0 as u8; plane.width()];
                render_row(plane, row, &mut pixels);
                rendered += 1;
                if results
                    .send(RowResult {
                        worker: id,
                        row,
                        pixels,
                    })
                    .is_err()
                {
                    debug!("{} lost its coordinator", id);
                    break;
                }
            }
            Ok(Assignment::Terminate) => break,
            Err(_) => {
                debug!("{} lost its coordinator", id);
                break;
            }
        }
    }
    debug!("{} exiting after {} rows", id, rendered);
    rendered
}
