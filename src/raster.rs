// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The assembled image: one contiguous, row-major buffer of grayscale
//! bytes.  Rows arrive whole and in any order; each may be written
//! exactly once.

use crate::errors::{RenderError, Result};

/// A width x height grid of grayscale bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    filled: Vec<bool>,
    remaining: usize,
}

impl Raster {
    /// An empty raster.  No row is considered written yet.
    pub fn new(width: usize, height: usize) -> Raster {
        Raster {
            width,
            height,
            pixels: vec![0 as u8; width * height],
            filled: vec![false; height],
            remaining: height,
        }
    }

    /// Image width, which is also the row stride.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Store a completed row.  Writing a row twice, writing past the
    /// last row, or writing a row of the wrong length is refused.
    pub fn insert_row(&mut self, index: usize, row: &[u8]) -> Result<()> {
        if index >= self.height {
            return Err(RenderError::ProtocolViolation(format!(
                "row {} is outside an image of height {}",
                index, self.height
            )));
        }
        if row.len() != self.width {
            return Err(RenderError::ProtocolViolation(format!(
                "row {} has {} pixels, expected {}",
                index,
                row.len(),
                self.width
            )));
        }
        if self.filled[index] {
            return Err(RenderError::ProtocolViolation(format!(
                "row {} delivered twice",
                index
            )));
        }
        let start = index * self.width;
        self.pixels[start..start + self.width].copy_from_slice(row);
        self.filled[index] = true;
        self.remaining -= 1;
        Ok(())
    }

    /// Mutable access to a row that has not been written yet, marking
    /// it written.  Used when the coordinator renders in place.
    pub(crate) fn claim_row(&mut self, index: usize) -> Option<&mut [u8]> {
        if index >= self.height || self.filled[index] {
            return None;
        }
        self.filled[index] = true;
        self.remaining -= 1;
        let start = index * self.width;
        Some(&mut self.pixels[start..start + self.width])
    }

    /// True once every row has been written.
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Number of rows still missing.
    pub fn missing_rows(&self) -> usize {
        self.remaining
    }

    /// A single row, if it has been written.
    pub fn row(&self, index: usize) -> Option<&[u8]> {
        if index < self.height && self.filled[index] {
            let start = index * self.width;
            Some(&self.pixels[start..start + self.width])
        } else {
            None
        }
    }

    /// The whole buffer, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
