// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tells the user how long the set took and saves the image.  Failing
//! to save is reported, not fatal: the timing still stands.

use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use log::warn;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::errors::Result;

/// Write a binary graymap.  `pixels` is row-major, `bounds` is
/// (width, height).
pub fn write_image(outfile: &Path, pixels: &[u8], bounds: (usize, usize)) -> Result<()> {
    let output = File::create(outfile)?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
    encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::Gray(8))?;
    Ok(())
}

/// Seconds, to the microsecond.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}

/// Print the timing line, try to save the image, and print whether
/// that worked.  Returns true if the image was written.
pub fn report<W: Write>(
    out: &mut W,
    elapsed: Duration,
    outfile: &Path,
    pixels: &[u8],
    bounds: (usize, usize),
) -> io::Result<bool> {
    writeln!(out, "Set calculation took {}s.", format_elapsed(elapsed))?;
    writeln!(out, "Writing image to file '{}'", outfile.display())?;
    match write_image(outfile, pixels, bounds) {
        Ok(()) => {
            writeln!(out, "SUCCESS: image written to file.")?;
            Ok(true)
        }
        Err(e) => {
            warn!("could not write {}: {}", outfile.display(), e);
            writeln!(out, "FAILED: image NOT written to file.")?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn elapsed_has_six_places() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.500000");
        assert_eq!(format_elapsed(Duration::from_micros(7)), "0.000007");
    }

    #[test]
    fn writes_a_binary_graymap() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tiny.pgm");
        write_image(&path, &[0, 35, 70, 105, 140, 175], (3, 2)).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P5"));
        assert!(bytes.ends_with(&[0, 35, 70, 105, 140, 175]));
    }

    #[test]
    fn reports_success() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ok.pgm");
        let mut out = Vec::new();
        let written = report(&mut out, Duration::from_secs(2), &path, &[1, 2], (2, 1)).unwrap();
        assert!(written);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Set calculation took 2.000000s."));
        assert!(text.contains("SUCCESS: image written to file."));
    }

    #[test]
    fn failure_to_write_is_not_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("nope.pgm");
        let mut out = Vec::new();
        let written = report(&mut out, Duration::from_secs(0), &path, &[1, 2], (2, 1)).unwrap();
        assert!(!written);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Set calculation took 0.000000s."));
        assert!(text.contains("FAILED: image NOT written to file."));
    }
}
