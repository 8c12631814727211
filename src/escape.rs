// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel.  Takes a point on the complex plane,
//! repeatedly squares it and adds the original point, and counts how
//! many rounds pass before the result leaves the circle of radius
//! two.  Points inside the Mandelbrot set never leave, so the count
//! is capped.

use num::Complex;

use crate::planes::{Pixel, PlaneMapper};

/// The iteration cap.  A point that survives this many rounds is
/// treated as a member of the set.
pub const MAX_ITER: u32 = 256;

/// Multiplier applied to the iteration count before it is folded
/// into a byte.
pub const GREY_STRETCH: u32 = 35;

/// Count iterations of z = z^2 + c, starting from zero, until |z|^2
/// reaches 4.0 or the count reaches `MAX_ITER`.  The test happens
/// after each step, so the smallest possible count is one.
#[inline]
pub fn escape_count(c: Complex<f64>) -> u32 {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    let mut count = 0;
    loop {
        z = z * z + c;
        count += 1;
        if z.norm_sqr() >= 4.0 || count >= MAX_ITER {
            return count;
        }
    }
}

/// Fold an iteration count into a grayscale byte.
#[inline]
pub fn grayscale(count: u32) -> u8 {
    ((count * GREY_STRETCH) % 256) as u8
}

/// Render one row of the image into `row`, which must be exactly one
/// image width long.
pub fn render_row(plane: &PlaneMapper, index: usize, row: &mut [u8]) {
    assert!(row.len() == plane.width());
    for (column, pixel) in row.iter_mut().enumerate() {
        let c = plane.pixel_to_point(&Pixel(index, column));
        *pixel = grayscale(escape_count(c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_count(Complex::new(0.0, 0.0)), MAX_ITER);
        assert_eq!(grayscale(MAX_ITER), 0);
    }

    #[test]
    fn far_corner_escapes_on_first_step() {
        assert_eq!(escape_count(Complex::new(-2.0, -2.0)), 1);
        assert_eq!(grayscale(1), 35);
    }

    #[test]
    fn minus_two_sits_on_the_boundary() {
        // z goes -2, 2, 2, ... and |z|^2 == 4.0 stops it at once.
        assert_eq!(escape_count(Complex::new(-2.0, 0.0)), 1);
    }

    #[test]
    fn point_just_outside_takes_a_few_steps() {
        // c = 0.5: 0.5, 0.75, 1.0625, 1.62890625, 3.1533...
        assert_eq!(escape_count(Complex::new(0.5, 0.0)), 5);
    }

    #[test]
    fn grayscale_wraps() {
        assert_eq!(grayscale(7), 245);
        assert_eq!(grayscale(8), 24);
    }

    #[test]
    fn rows_match_the_pixel_kernel() {
        let plane = PlaneMapper::new(100, 100);
        let mut row = vec![0u8; 100];
        render_row(&plane, 50, &mut row);
        assert_eq!(row[50], 0);
        render_row(&plane, 0, &mut row);
        assert_eq!(row[0], 35);
    }
}
