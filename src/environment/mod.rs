//! Environment maps in equirectangular projection.

pub use crate::error::Error;

use humansize::{format_size, BINARY};
use image::DynamicImage;
use std::{
    f64::consts::{PI, TAU},
    fmt,
    path::Path,
};

/// Radiance over the full sphere in equirectangular projection.
///
/// The columns span the azimuth from `0` to `2pi`,
/// and the rows span the polar angle from `0` to `pi`.
#[derive(Clone, PartialEq)]
pub struct EnvironmentMap {
    height: u32,
    width: u32,
    /// `[H * W]` in row-major order
    pixels: Vec<[f32; 3]>,
}

impl fmt::Debug for EnvironmentMap {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("EnvironmentMap")
            .field("height", &self.height)
            .field("width", &self.width)
            .field("pixels.len()", &self.pixels.len())
            .finish()
    }
}

/// Constructors
impl EnvironmentMap {
    /// Build the map from RGB pixels in row-major order.
    pub fn new(
        height: u32,
        width: u32,
        pixels: Vec<[f32; 3]>,
    ) -> Result<Self, Error> {
        if height == 0 || width == 0 {
            return Err(Error::Validation(
                format!("The image size ({width} x {height})"),
                "non-zero".into(),
            ));
        }

        let pixel_count = height as usize * width as usize;
        if pixels.len() != pixel_count {
            return Err(Error::Validation(
                format!("The pixel count ({})", pixels.len()),
                format!("{pixel_count}"),
            ));
        }

        Ok(Self {
            height,
            width,
            pixels,
        })
    }

    /// Build the map by evaluating `f(row, column)` at every pixel.
    pub fn from_fn(
        height: u32,
        width: u32,
        mut f: impl FnMut(u32, u32) -> [f32; 3],
    ) -> Result<Self, Error> {
        let pixels = (0..height)
            .flat_map(|row| (0..width).map(move |column| (row, column)))
            .map(|(row, column)| f(row, column))
            .collect();
        Self::new(height, width, pixels)
    }

    /// Build the map from a decoded image.
    ///
    /// Integer samples are normalized to `[0, 1]`,
    /// float samples are kept as they are.
    pub fn from_image(image: DynamicImage) -> Result<Self, Error> {
        let image = image.into_rgb32f();
        let (width, height) = image.dimensions();
        let pixels = bytemuck::cast_slice::<f32, [f32; 3]>(image.as_raw()).to_vec();
        Self::new(height, width, pixels)
    }

    /// Decode the map from an image file.
    ///
    /// Any failure is reported as [`Error::Load`] with the path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let map = image::open(path)
            .map_err(Error::from)
            .and_then(Self::from_image)
            .map_err(|error| Error::Load(path.to_owned(), error.into()))?;

        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(
            target: "env2sph::environment",
            "open > {path:?} ({} x {}, {})",
            map.width,
            map.height,
            map.size_readable(),
        );

        Ok(map)
    }
}

/// Pixel accessors
impl EnvironmentMap {
    /// `H`
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// `W`
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// `[H * W]`
    #[inline]
    pub fn pixels(&self) -> &[[f32; 3]] {
        &self.pixels
    }

    /// The pixel at `(row, column)`.
    ///
    /// ## Panics
    ///
    /// It panics if the position is out of bounds.
    #[inline]
    pub fn get(
        &self,
        row: u32,
        column: u32,
    ) -> [f32; 3] {
        assert!(row < self.height && column < self.width);
        self.pixels[row as usize * self.width as usize + column as usize]
    }

    /// Size of the pixels in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        size_of_val(self.pixels.as_slice())
    }

    /// Readable size of the pixels.
    #[inline]
    pub fn size_readable(&self) -> String {
        format_size(self.size(), BINARY.decimal_places(1))
    }
}

/// Spherical sampling
impl EnvironmentMap {
    /// The pixel position `(row, column)` containing the direction
    /// of the polar angle `theta` and the azimuth `phi`.
    ///
    /// The position is clamped into the image, so the poles map to
    /// the first and the last rows, and `phi = 2pi` maps to the last column.
    pub fn position(
        &self,
        theta: f64,
        phi: f64,
    ) -> (u32, u32) {
        // floor(phi / 2pi * W)
        let column = (phi / TAU * self.width as f64).floor();
        // floor(theta / pi * H)
        let row = (theta / PI * self.height as f64).floor();

        let column = column.clamp(0.0, (self.width - 1) as f64) as u32;
        let row = row.clamp(0.0, (self.height - 1) as f64) as u32;
        (row, column)
    }

    /// The nearest pixel of the direction
    /// of the polar angle `theta` and the azimuth `phi`.
    #[inline]
    pub fn sample(
        &self,
        theta: f64,
        phi: f64,
    ) -> [f32; 3] {
        let (row, column) = self.position(theta, phi);
        self.get(row, column)
    }
}
