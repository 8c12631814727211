// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a fixed region of the complex plane centered on the origin.
use num::Complex;

/// The radius of the complex region the image covers.
pub const RADIUS: f64 = 2.0;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the row and column of a point in a region, in that
/// order, because rows are what we hand out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of the integral plane onto the complex plane.  Both
/// axes share a single scale factor derived from the width alone, so
/// an image that is not square is stretched along the imaginary axis.
/// Existing output depends on this, so it stays.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The right-lower hand corner of the integral cartesian plane.
    /// The left-upper is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    // Offsets subtracted from column and row before scaling.
    center: (f64, f64),
    // Size of one pixel on the complex plane.
    scale: f64,
}

impl PlaneMapper {
    /// Constructor.  Takes the width and height of the image.
    pub fn new(width: usize, height: usize) -> PlaneMapper {
        let w = width as f64;
        let h = height as f64;
        PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            center: (w / RADIUS, h / RADIUS),
            scale: (RADIUS * RADIUS) / w,
        }
    }

    /// Width of the image in pixels.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Height of the image in pixels.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given the row and column of a pixel on the integral cartesian
    /// plane, return the complex number at the equivalent location.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            ((pixel.1 as f64) - self.center.0) * self.scale,
            ((pixel.0 as f64) - self.center.1) * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pixel_maps_to_origin() {
        let pm = PlaneMapper::new(100, 100);
        assert_eq!(pm.pixel_to_point(&Pixel(50, 50)), Complex::new(0.0, 0.0));
    }

    #[test]
    fn corner_pixel_maps_to_lower_left() {
        let pm = PlaneMapper::new(100, 100);
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
    }

    #[test]
    fn column_drives_real_and_row_drives_imaginary() {
        let pm = PlaneMapper::new(4, 4);
        assert_eq!(pm.pixel_to_point(&Pixel(0, 2)), Complex::new(0.0, -2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 0)), Complex::new(-2.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(3, 3)), Complex::new(1.0, 1.0));
    }

    #[test]
    fn tall_images_share_the_width_scale() {
        let pm = PlaneMapper::new(4, 8);
        // Row 0 sits at height / radius = 4 rows above center, one unit each.
        assert_eq!(pm.pixel_to_point(&Pixel(0, 2)), Complex::new(0.0, -4.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 2)), Complex::new(0.0, 0.0));
    }

    #[test]
    fn sizes() {
        let pm = PlaneMapper::new(7, 3);
        assert_eq!(pm.len(), 21);
        assert_eq!(pm.width(), 7);
        assert_eq!(pm.height(), 3);
        assert!(!pm.is_empty());
        assert!(PlaneMapper::new(0, 3).is_empty());
    }
}
