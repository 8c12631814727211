// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate mandelrow;

use mandelrow::{render_dynamic, render_pixels, render_sequential, PlaneMapper};

#[test]
fn threads_match_the_sequential_renderer() {
    for &(width, height) in &[(1, 1), (100, 100), (64, 21), (13, 90)] {
        let plane = PlaneMapper::new(width, height);
        let expected = render_pixels(&plane);
        for &workers in &[0, 1, 3, 8] {
            let raster = render_dynamic(&plane, workers).unwrap();
            assert!(raster.is_complete());
            assert_eq!(
                raster.pixels(),
                &expected[..],
                "{}x{} with {} workers",
                width,
                height,
                workers
            );
        }
    }
}

#[test]
fn row_renderer_matches_pixel_renderer() {
    let plane = PlaneMapper::new(57, 31);
    assert_eq!(render_sequential(&plane).pixels(), &render_pixels(&plane)[..]);
}

#[test]
fn known_pixels_of_a_square_image() {
    let plane = PlaneMapper::new(100, 100);
    let raster = render_dynamic(&plane, 4).unwrap();
    // The origin never escapes: 256 * 35 mod 256.
    assert_eq!(raster.row(50).unwrap()[50], 0);
    // (-2, -2) escapes on the first step.
    assert_eq!(raster.row(0).unwrap()[0], 35);
}
