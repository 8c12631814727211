// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Messages exchanged between the coordinator and its workers.

use std::fmt;

/// Identifies one worker in the pool.  Workers are numbered from zero
/// in pool order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerId(pub usize);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "worker-{}", self.0)
    }
}

/// Coordinator to worker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Assignment {
    /// Render this row and send it back.
    Row(usize),
    /// No more work; exit.
    Terminate,
}

/// Worker to coordinator: one finished row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowResult {
    /// Who rendered it.
    pub worker: WorkerId,
    /// Which row it is.
    pub row: usize,
    /// Exactly one image width of grayscale bytes.
    pub pixels: Vec<u8>,
}
