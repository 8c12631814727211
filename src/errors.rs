// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error types shared by the renderers and the binaries.

use failure::Fail;
use std::io;

/// Everything that can go wrong during a run.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// Help or version text was asked for instead of a run.
    #[fail(display = "{}", _0)]
    Usage(String),

    /// The command line could not be understood at all.
    #[fail(display = "invalid input: {}", _0)]
    InvalidInput(String),

    /// The dimensions parsed, but fall outside [1, 32000].
    #[fail(display = "invalid image dimensions: {} x {}", width, height)]
    InvalidDimensions {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },

    /// A message arrived that the row protocol does not allow.  This
    /// is a logic error, never a user error.
    #[fail(display = "protocol violation: {}", _0)]
    ProtocolViolation(String),

    /// A worker or the coordinator hung up in the middle of a run.
    #[fail(display = "channel disconnected: {}", _0)]
    Disconnected(String),

    /// The image could not be written.
    #[fail(display = "i/o error: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> RenderError {
        RenderError::Io(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, RenderError>;
