// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The row scheduler.  Rows cost wildly different amounts to render:
//! a row that crosses the black heart of the set runs every pixel to
//! the iteration cap, while a row far outside escapes almost at once.
//! Splitting the rows up front would leave the lucky threads idle, so
//! instead every worker holds exactly one row at a time and asks for
//! another only when it hands one back.
//!
//! This struct only keeps the books.  It knows nothing about threads
//! or channels; it says which message each worker should receive
//! next, and refuses any exchange the protocol does not allow.

use crate::errors::{RenderError, Result};
use crate::protocol::{Assignment, WorkerId};

#[derive(Copy, Clone, Debug, PartialEq)]
enum Slot {
    Idle,
    Busy(usize),
    Terminated,
}

/// Bookkeeping for one run of `height` rows over `workers` workers.
#[derive(Debug)]
pub struct RowScheduler {
    height: usize,
    next_row: usize,
    in_flight: usize,
    slots: Vec<Slot>,
}

impl RowScheduler {
    /// A scheduler with every row unassigned and every worker idle.
    pub fn new(height: usize, workers: usize) -> RowScheduler {
        RowScheduler {
            height,
            next_row: 0,
            in_flight: 0,
            slots: vec![Slot::Idle; workers],
        }
    }

    /// Number of workers in the pool.
    pub fn workers(&self) -> usize {
        self.slots.len()
    }

    /// The smallest row not yet handed out.
    pub fn next_row(&self) -> usize {
        self.next_row
    }

    /// Rows currently held by workers.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// The row a worker is holding, if any.
    pub fn outstanding(&self, worker: WorkerId) -> Option<usize> {
        match self.slots.get(worker.0) {
            Some(Slot::Busy(row)) => Some(*row),
            _ => None,
        }
    }

    /// True once nothing is in flight and nothing is left to hand out.
    pub fn is_finished(&self) -> bool {
        self.in_flight == 0 && self.next_row == self.height
    }

    /// The opening round: one message per worker, in pool order.  When
    /// the pool is larger than the image the surplus workers are sent
    /// `Terminate` straight away, so an empty image assigns nothing and
    /// only releases the pool.
    pub fn prime(&mut self) -> Result<Vec<(WorkerId, Assignment)>> {
        if self.slots.iter().any(|s| *s != Slot::Idle) {
            return Err(RenderError::ProtocolViolation(
                "scheduler primed twice".to_string(),
            ));
        }
        let mut out = Vec::with_capacity(self.slots.len());
        for index in 0..self.slots.len() {
            let worker = WorkerId(index);
            out.push((worker, self.next_for(worker)));
        }
        Ok(out)
    }

    /// A worker has handed back `row`.  Returns the message that worker
    /// gets next.  Fails if the worker was not holding that row.
    pub fn complete(&mut self, worker: WorkerId, row: usize) -> Result<Assignment> {
        match self.slots.get(worker.0) {
            Some(Slot::Busy(held)) if *held == row => {}
            Some(slot) => {
                return Err(RenderError::ProtocolViolation(format!(
                    "{} returned row {} while {:?}",
                    worker, row, slot
                )));
            }
            None => {
                return Err(RenderError::ProtocolViolation(format!(
                    "{} is not in a pool of {}",
                    worker,
                    self.slots.len()
                )));
            }
        }
        debug_assert!(self.in_flight > 0);
        self.in_flight -= 1;
        self.slots[worker.0] = Slot::Idle;
        Ok(self.next_for(worker))
    }

    // Only ever called for an idle worker.
    fn next_for(&mut self, worker: WorkerId) -> Assignment {
        if self.next_row < self.height {
            let row = self.next_row;
            self.next_row += 1;
            self.in_flight += 1;
            self.slots[worker.0] = Slot::Busy(row);
            Assignment::Row(row)
        } else {
            self.slots[worker.0] = Slot::Terminated;
            Assignment::Terminate
        }
    }

    /// True once every worker has been told to stop.
    pub fn all_terminated(&self) -> bool {
        self.slots.iter().all(|s| *s == Slot::Terminated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priming_hands_out_rows_in_pool_order() {
        let mut s = RowScheduler::new(10, 3);
        let opening = s.prime().unwrap();
        assert_eq!(
            opening,
            vec![
                (WorkerId(0), Assignment::Row(0)),
                (WorkerId(1), Assignment::Row(1)),
                (WorkerId(2), Assignment::Row(2)),
            ]
        );
        assert_eq!(s.in_flight(), 3);
        assert_eq!(s.next_row(), 3);
    }

    #[test]
    fn surplus_workers_are_terminated_at_priming() {
        let mut s = RowScheduler::new(2, 4);
        let opening = s.prime().unwrap();
        assert_eq!(opening[2], (WorkerId(2), Assignment::Terminate));
        assert_eq!(opening[3], (WorkerId(3), Assignment::Terminate));
        assert_eq!(s.in_flight(), 2);
    }

    #[test]
    fn completed_worker_gets_the_next_row_then_terminate() {
        let mut s = RowScheduler::new(3, 2);
        s.prime().unwrap();
        assert_eq!(s.complete(WorkerId(1), 1).unwrap(), Assignment::Row(2));
        assert_eq!(s.outstanding(WorkerId(1)), Some(2));
        assert_eq!(s.complete(WorkerId(0), 0).unwrap(), Assignment::Terminate);
        assert!(!s.is_finished());
        assert_eq!(s.complete(WorkerId(1), 2).unwrap(), Assignment::Terminate);
        assert!(s.is_finished());
        assert!(s.all_terminated());
    }

    #[test]
    fn wrong_row_is_a_violation() {
        let mut s = RowScheduler::new(4, 2);
        s.prime().unwrap();
        assert!(s.complete(WorkerId(0), 1).is_err());
        assert!(s.complete(WorkerId(5), 0).is_err());
        assert_eq!(s.in_flight(), 2);
    }

    #[test]
    fn a_terminated_worker_cannot_report() {
        let mut s = RowScheduler::new(1, 2);
        s.prime().unwrap();
        assert!(s.complete(WorkerId(1), 0).is_err());
    }

    #[test]
    fn repeat_delivery_is_a_violation() {
        let mut s = RowScheduler::new(4, 1);
        s.prime().unwrap();
        s.complete(WorkerId(0), 0).unwrap();
        assert!(s.complete(WorkerId(0), 0).is_err());
    }

    #[test]
    fn priming_twice_is_a_violation() {
        let mut s = RowScheduler::new(4, 1);
        s.prime().unwrap();
        assert!(s.prime().is_err());
    }

    #[test]
    fn empty_runs_assign_nothing() {
        let mut s = RowScheduler::new(0, 2);
        assert_eq!(
            s.prime().unwrap(),
            vec![
                (WorkerId(0), Assignment::Terminate),
                (WorkerId(1), Assignment::Terminate),
            ]
        );
        assert!(s.is_finished());
        let mut s = RowScheduler::new(3, 0);
        assert!(s.prime().unwrap().is_empty());
        assert!(!s.is_finished());
    }
}
