// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Single-threaded renderers.  No scheduling, no channels: the same
//! kernel applied to every pixel in turn.  These are the yardstick the
//! distributed renderer is measured against.

use itertools::iproduct;

use crate::escape::{escape_count, grayscale, render_row};
use crate::planes::{Pixel, PlaneMapper};
use crate::raster::Raster;

/// Render every row, top to bottom, into a raster.
pub fn render_sequential(plane: &PlaneMapper) -> Raster {
    let mut raster = Raster::new(plane.width(), plane.height());
    for index in 0..plane.height() {
        if let Some(row) = raster.claim_row(index) {
            render_row(plane, index, row);
        }
    }
    raster
}

/// Render pixel by pixel straight into a row-major buffer.
pub fn render_pixels(plane: &PlaneMapper) -> Vec<u8> {
    iproduct!(0..plane.height(), 0..plane.width())
        .map(|(row, column)| grayscale(escape_count(plane.pixel_to_point(&Pixel(row, column)))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_renderers_agree() {
        let plane = PlaneMapper::new(33, 17);
        let raster = render_sequential(&plane);
        assert!(raster.is_complete());
        assert_eq!(raster.pixels(), &render_pixels(&plane)[..]);
    }

    #[test]
    fn known_pixels() {
        let plane = PlaneMapper::new(100, 100);
        let pixels = render_pixels(&plane);
        assert_eq!(pixels[50 * 100 + 50], 0);
        assert_eq!(pixels[0], 35);
    }
}
