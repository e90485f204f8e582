//! Projection of environment maps onto spherical harmonics.

pub use crate::{
    coefficients::ShCoefficients,
    environment::EnvironmentMap,
    error::Error,
    spherical_harmonics::{Basis, SH_COUNT_MAX, SH_INDICES, SPHERE_SOLID_ANGLE},
};

use rayon::prelude::*;
use std::f64::consts::TAU;

/// The default of [`ShProjectorConfig::phi_count`]
pub const PHI_COUNT_DEFAULT: u32 = 256;

/// The default of [`ShProjectorConfig::theta_count`]
pub const THETA_COUNT_DEFAULT: u32 = 128;

/// The configuration for [`ShProjector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShProjectorConfig {
    /// The basis to project onto.
    pub basis: Basis,
    /// `N_phi`, the count of azimuths in the quadrature grid.
    pub phi_count: u32,
    /// `N_theta`, the count of polar angles in the quadrature grid.
    pub theta_count: u32,
}

/// The projector with a fixed quadrature grid.
///
/// The grid is uniform in `cos(theta)` and in `phi`,
/// so every cell covers the same solid angle `4pi / (N_theta * N_phi)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ShProjector {
    basis: Basis,
    /// `[N_phi]`
    azimuths: Vec<f64>,
    /// `[N_theta]`
    polar_angles: Vec<f64>,
}

impl ShProjectorConfig {
    #[inline]
    pub const fn new() -> Self {
        Self {
            basis: Basis::Real,
            phi_count: PHI_COUNT_DEFAULT,
            theta_count: THETA_COUNT_DEFAULT,
        }
    }

    #[inline]
    pub const fn with_basis(
        mut self,
        basis: Basis,
    ) -> Self {
        self.basis = basis;
        self
    }

    #[inline]
    pub const fn with_phi_count(
        mut self,
        phi_count: u32,
    ) -> Self {
        self.phi_count = phi_count;
        self
    }

    #[inline]
    pub const fn with_theta_count(
        mut self,
        theta_count: u32,
    ) -> Self {
        self.theta_count = theta_count;
        self
    }

    /// Initialize from the configuration.
    pub fn init(&self) -> Result<ShProjector, Error> {
        if self.phi_count == 0 {
            return Err(Error::Validation(
                format!("ShProjectorConfig::phi_count ({})", self.phi_count),
                "positive".into(),
            ));
        }
        if self.theta_count == 0 {
            return Err(Error::Validation(
                format!("ShProjectorConfig::theta_count ({})", self.theta_count),
                "positive".into(),
            ));
        }

        Ok(ShProjector {
            basis: self.basis,
            azimuths: (0..self.phi_count)
                .map(|j| azimuth(j, self.phi_count))
                .collect(),
            polar_angles: (0..self.theta_count)
                .map(|i| polar_angle(i, self.theta_count))
                .collect(),
        })
    }
}

impl Default for ShProjectorConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ShProjector {
    #[inline]
    pub const fn basis(&self) -> Basis {
        self.basis
    }

    /// `[N_phi]`
    #[inline]
    pub fn azimuths(&self) -> &[f64] {
        &self.azimuths
    }

    /// `[N_theta]`
    #[inline]
    pub fn polar_angles(&self) -> &[f64] {
        &self.polar_angles
    }

    /// `N_theta * N_phi`
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.polar_angles.len() * self.azimuths.len()
    }

    /// Project the radiance of `map` onto the basis.
    ///
    /// `c_k = 4pi / (N_theta * N_phi) * sum(L(theta_i, phi_j) * Y_k(theta_i, phi_j))`
    ///
    /// Each cell takes the nearest pixel of its center.
    /// The basis functions are accumulated in parallel,
    /// each over the cells in the order of `(i, j)`.
    pub fn project(
        &self,
        map: &EnvironmentMap,
    ) -> ShCoefficients {
        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(
            target: "env2sph::projector",
            "project > {} x {} cells of {map:?}",
            self.polar_angles.len(),
            self.azimuths.len(),
        );

        // [N_theta * N_phi] (Y, L)
        let cells = self
            .polar_angles
            .iter()
            .flat_map(|&theta| self.azimuths.iter().map(move |&phi| (theta, phi)))
            .map(|(theta, phi)| {
                let values = self.basis.evaluate_at(theta, phi);
                let color = map.sample(theta, phi).map(f64::from);
                (values, color)
            })
            .collect::<Vec<_>>();

        // N_theta * N_phi
        let cell_count = self.cell_count() as f64;

        let colors = SH_INDICES
            .par_iter()
            .map(|index| {
                let k = index.index;
                let value = cells.iter().fold([0.0; 3], |mut value, (values, color)| {
                    let w = SPHERE_SOLID_ANGLE * values[k];
                    value[0] += w * color[0];
                    value[1] += w * color[1];
                    value[2] += w * color[2];
                    value
                });

                #[cfg(all(debug_assertions, not(test)))]
                log::debug!(
                    target: "env2sph::projector",
                    "project > (l, m) = ({}, {})",
                    index.degree,
                    index.order,
                );

                value.map(|v| v / cell_count)
            })
            .collect::<Vec<_>>();

        let mut coefficients = ShCoefficients::new(self.basis, Default::default());
        coefficients.colors.copy_from_slice(&colors);
        coefficients
    }
}

/// The polar angle of the `i`-th cell center among `count` cells.
///
/// `arccos(2 * (i + 0.5) / count - 1)`
#[inline]
pub fn polar_angle(
    i: u32,
    count: u32,
) -> f64 {
    let cos = 2.0 * (i as f64 + 0.5) / count as f64 - 1.0;
    cos.clamp(-1.0, 1.0).acos()
}

/// The azimuth of the `j`-th cell center among `count` cells.
///
/// `2pi * (j + 0.5) / count`
#[inline]
pub fn azimuth(
    j: u32,
    count: u32,
) -> f64 {
    TAU * (j as f64 + 0.5) / count as f64
}
