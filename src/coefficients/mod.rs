//! Spherical harmonics coefficient sets.

pub mod export;
pub mod import;

pub use crate::{
    error::Error,
    spherical_harmonics::{Basis, SH_COUNT_MAX, SH_INDICES},
};
pub use export::{sph_path, ChannelLayout, SPH_EXTENSION};

use std::f64::consts::PI;

/// The cosine lobe convolution weights of each degree
///
/// `[pi, 2pi / 3, pi / 4]`
pub const IRRADIANCE_WEIGHTS: [f64; 3] = [PI, 2.0 * PI / 3.0, PI / 4.0];

/// Nine RGB coefficients of spherical harmonics up to degree 2.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShCoefficients {
    /// The basis the coefficients are projected onto.
    pub basis: Basis,
    /// `[M, 3]`
    ///
    /// `M` is [`SH_COUNT_MAX`], ordered as [`SH_INDICES`].
    pub colors: [[f64; 3]; SH_COUNT_MAX],
}

impl ShCoefficients {
    #[inline]
    pub const fn new(
        basis: Basis,
        colors: [[f64; 3]; SH_COUNT_MAX],
    ) -> Self {
        Self { basis, colors }
    }

    /// `[M * 3]`
    #[inline]
    pub fn as_flat(&self) -> &[f64] {
        bytemuck::cast_slice(self.colors.as_slice())
    }

    /// Multiply all coefficients by `factor`.
    pub fn scale(
        &mut self,
        factor: f64,
    ) -> &mut Self {
        self.colors
            .iter_mut()
            .flatten()
            .for_each(|value| *value *= factor);
        self
    }

    /// Reconstruct the radiance at the polar angle `theta` and the azimuth `phi`.
    ///
    /// `sum(c_k * Y_k(theta, phi))`
    pub fn evaluate(
        &self,
        theta: f64,
        phi: f64,
    ) -> [f64; 3] {
        self.weighted_sum(theta, phi, |_| 1.0)
    }

    /// The irradiance of a diffuse surface facing the polar angle `theta`
    /// and the azimuth `phi`.
    ///
    /// `sum(A_l * c_k * Y_k(theta, phi))`, where `A_l` is [`IRRADIANCE_WEIGHTS`].
    pub fn irradiance(
        &self,
        theta: f64,
        phi: f64,
    ) -> [f64; 3] {
        self.weighted_sum(theta, phi, |degree| IRRADIANCE_WEIGHTS[degree as usize])
    }

    fn weighted_sum(
        &self,
        theta: f64,
        phi: f64,
        weight: impl Fn(u32) -> f64,
    ) -> [f64; 3] {
        let values = self.basis.evaluate_at(theta, phi);
        SH_INDICES
            .iter()
            .fold([0.0; 3], |mut color, index| {
                let w = weight(index.degree) * values[index.index];
                let c = &self.colors[index.index];
                color[0] += w * c[0];
                color[1] += w * c[1];
                color[2] += w * c[2];
                color
            })
    }
}
