//! Real spherical harmonics from degree 0 to 2.

use std::{
    f64::consts::{PI, TAU},
    sync::LazyLock,
};

/// The count of spherical harmonics coefficients
pub const SH_COUNT_MAX: usize = (SH_DEGREE_MAX as usize + 1).pow(2);

/// The maximum degree of spherical harmonics
pub const SH_DEGREE_MAX: u32 = 2;

/// The real coefficients of orthonormalized spherical harmonics from degree 0 to 2
///
/// ## Examples
///
/// ```rust
/// use env2sph::spherical_harmonics::SH_COEF;
///
/// assert_eq!(SH_COEF.0[0], 0.28209479177387814);
/// assert_eq!(SH_COEF.2[2 + 2], 0.5462742152960396);
///
/// assert_eq!(
///     *SH_COEF,
///     (
///         [0.28209479177387814],
///         [
///             -0.4886025119029199,
///             0.4886025119029199,
///             -0.4886025119029199,
///         ],
///         [
///             1.0925484305920792,
///             -1.0925484305920792,
///             0.31539156525252005,
///             -1.0925484305920792,
///             0.5462742152960396,
///         ],
///     )
/// );
/// ```
#[allow(clippy::type_complexity)]
pub static SH_COEF: LazyLock<([f64; 1], [f64; 3], [f64; 5])> = LazyLock::new(|| {
    (
        [(1.0 / 4.0 / PI).sqrt()],
        [
            -(3.0 / 4.0 / PI).sqrt(),
            (3.0 / 4.0 / PI).sqrt(),
            -(3.0 / 4.0 / PI).sqrt(),
        ],
        [
            (15.0 / 4.0 / PI).sqrt(),
            -(15.0 / 4.0 / PI).sqrt(),
            (5.0 / 16.0 / PI).sqrt(),
            -(15.0 / 4.0 / PI).sqrt(),
            (15.0 / 16.0 / PI).sqrt(),
        ],
    )
});

/// The normalization of complex spherical harmonics `|Y_l^m|` from degree 0 to 2
///
/// It is indexed by `|m|`.
#[allow(clippy::type_complexity)]
static SH_COEF_COMPLEX: LazyLock<([f64; 1], [f64; 2], [f64; 3])> = LazyLock::new(|| {
    (
        [(1.0 / 4.0 / PI).sqrt()],
        [(3.0 / 4.0 / PI).sqrt(), (3.0 / 8.0 / PI).sqrt()],
        [
            (5.0 / 16.0 / PI).sqrt(),
            (15.0 / 8.0 / PI).sqrt(),
            (15.0 / 32.0 / PI).sqrt(),
        ],
    )
});

/// The indices of the basis functions, ordered by degree and then by order.
///
/// ## Examples
///
/// ```rust
/// use env2sph::spherical_harmonics::SH_INDICES;
///
/// let pairs = SH_INDICES.map(|index| (index.degree, index.order));
/// assert_eq!(
///     pairs,
///     [
///         (0, 0),
///         (1, -1),
///         (1, 0),
///         (1, 1),
///         (2, -2),
///         (2, -1),
///         (2, 0),
///         (2, 1),
///         (2, 2),
///     ]
/// );
/// ```
pub const SH_INDICES: [ShIndex; SH_COUNT_MAX] = [
    ShIndex::new(0, 0, 0),
    ShIndex::new(1, -1, 1),
    ShIndex::new(1, 0, 2),
    ShIndex::new(1, 1, 3),
    ShIndex::new(2, -2, 4),
    ShIndex::new(2, -1, 5),
    ShIndex::new(2, 0, 6),
    ShIndex::new(2, 1, 7),
    ShIndex::new(2, 2, 8),
];

/// A basis function index.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ShIndex {
    /// `l`
    pub degree: u32,
    /// `m`, from `-l` to `l`.
    pub order: i32,
    /// `k`, the slot in a coefficient set.
    pub index: usize,
}

impl ShIndex {
    #[inline]
    pub const fn new(
        degree: u32,
        order: i32,
        index: usize,
    ) -> Self {
        Self {
            degree,
            order,
            index,
        }
    }
}

/// The convention of the basis functions.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, clap::ValueEnum)]
pub enum Basis {
    /// Orthonormal real spherical harmonics.
    #[default]
    Real,
    /// The real part of complex spherical harmonics.
    ///
    /// It is not a basis: `Re(Y_l^-m) = (-1)^m * Re(Y_l^m)`.
    /// It only reproduces coefficients written by the legacy tool.
    ComplexRealPart,
}

impl Basis {
    /// Evaluate all basis functions at the unit `direction`.
    ///
    /// The values are ordered as [`SH_INDICES`].
    pub fn evaluate(
        &self,
        direction: &[f64; 3],
    ) -> [f64; SH_COUNT_MAX] {
        let [x, y, z] = *direction;
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;

        match self {
            Self::Real => {
                let (c0, c1, c2) = &*SH_COEF;
                [
                    c0[0],
                    c1[0] * y,
                    c1[1] * z,
                    c1[2] * x,
                    c2[0] * x * y,
                    c2[1] * y * z,
                    c2[2] * (2.0 * zz - xx - yy),
                    c2[3] * x * z,
                    c2[4] * (xx - yy),
                ]
            },
            Self::ComplexRealPart => {
                let (k0, k1, k2) = &*SH_COEF_COMPLEX;
                // sin(t) * cos(p) = x
                // sin(t)^2 * cos(2p) = x^2 - y^2
                // sin(t) * cos(t) * cos(p) = x * z
                [
                    k0[0],
                    k1[1] * x,
                    k1[0] * z,
                    -k1[1] * x,
                    k2[2] * (xx - yy),
                    k2[1] * x * z,
                    k2[0] * (2.0 * zz - xx - yy),
                    -k2[1] * x * z,
                    k2[2] * (xx - yy),
                ]
            },
        }
    }

    /// Evaluate all basis functions at the polar angle `theta` and the azimuth `phi`.
    #[inline]
    pub fn evaluate_at(
        &self,
        theta: f64,
        phi: f64,
    ) -> [f64; SH_COUNT_MAX] {
        self.evaluate(&direction(theta, phi))
    }
}

/// The unit direction of the polar angle `theta` and the azimuth `phi`.
///
/// `[sin(theta) * cos(phi), sin(theta) * sin(phi), cos(theta)]`
#[inline]
pub fn direction(
    theta: f64,
    phi: f64,
) -> [f64; 3] {
    let (theta_sin, theta_cos) = theta.sin_cos();
    let (phi_sin, phi_cos) = phi.sin_cos();
    [theta_sin * phi_cos, theta_sin * phi_sin, theta_cos]
}

/// The solid angle of the unit sphere.
pub const SPHERE_SOLID_ANGLE: f64 = 2.0 * TAU;

#[cfg(test)]
mod tests {
    #[test]
    fn indices_in_order() {
        use super::*;

        let mut expected = vec![];
        for degree in 0..=SH_DEGREE_MAX {
            for order in -(degree as i32)..=degree as i32 {
                expected.push((degree, order));
            }
        }

        let output = SH_INDICES
            .iter()
            .enumerate()
            .map(|(k, index)| {
                assert_eq!(index.index, k);
                (index.degree, index.order)
            })
            .collect::<Vec<_>>();
        assert_eq!(output, expected);
    }

    #[test]
    fn real_basis_is_orthonormal() {
        use super::*;

        // Midpoint quadrature over (cos(theta), phi)
        let theta_count = 256;
        let phi_count = 512;
        let mut gram = [[0.0; SH_COUNT_MAX]; SH_COUNT_MAX];
        for i in 0..theta_count {
            let theta = (2.0 * (i as f64 + 0.5) / theta_count as f64 - 1.0).acos();
            for j in 0..phi_count {
                let phi = TAU * (j as f64 + 0.5) / phi_count as f64;
                let values = Basis::Real.evaluate_at(theta, phi);
                for a in 0..SH_COUNT_MAX {
                    for b in 0..SH_COUNT_MAX {
                        gram[a][b] += values[a] * values[b];
                    }
                }
            }
        }

        let weight = SPHERE_SOLID_ANGLE / (theta_count * phi_count) as f64;
        for (a, row) in gram.iter().enumerate() {
            for (b, value) in row.iter().enumerate() {
                let target = if a == b { 1.0 } else { 0.0 };
                let output = value * weight;
                assert!(
                    (output - target).abs() < 1e-3,
                    "gram[{a}][{b}] = {output}"
                );
            }
        }
    }

    #[test]
    fn real_basis_at_poles() {
        use super::*;

        let (c0, c1, c2) = &*SH_COEF;

        let target = [c0[0], 0.0, c1[1], 0.0, 0.0, 0.0, 2.0 * c2[2], 0.0, 0.0];
        let output = Basis::Real.evaluate(&[0.0, 0.0, 1.0]);
        assert_eq!(output, target);

        let target = [c0[0], 0.0, -c1[1], 0.0, 0.0, 0.0, 2.0 * c2[2], 0.0, 0.0];
        let output = Basis::Real.evaluate(&[0.0, 0.0, -1.0]);
        assert_eq!(output, target);
    }

    #[test]
    fn complex_real_part_basis() {
        use super::*;

        let theta = 1.1;
        let phi = 0.3;
        let output = Basis::ComplexRealPart.evaluate_at(theta, phi);

        // Re(Y_1^-1) = sqrt(3 / 8pi) * sin(theta) * cos(phi)
        let target = (3.0 / 8.0 / PI).sqrt() * theta.sin() * phi.cos();
        assert!((output[1] - target).abs() < 1e-12);
        assert!((output[3] + target).abs() < 1e-12);

        // Re(Y_2^2) = sqrt(15 / 32pi) * sin(theta)^2 * cos(2phi)
        let target = (15.0 / 32.0 / PI).sqrt() * theta.sin().powi(2) * (2.0 * phi).cos();
        assert!((output[4] - target).abs() < 1e-12);
        assert!((output[8] - target).abs() < 1e-12);

        // Re(Y_2^0) = sqrt(5 / 16pi) * (3 * cos(theta)^2 - 1)
        let target = (5.0 / 16.0 / PI).sqrt() * (3.0 * theta.cos().powi(2) - 1.0);
        assert!((output[6] - target).abs() < 1e-12);

        let real = Basis::Real.evaluate_at(theta, phi);
        assert_eq!(output[0], real[0]);
        assert!((output[2] - real[2]).abs() < 1e-12);
        assert!((output[6] - real[6]).abs() < 1e-12);
    }

    #[test]
    fn direction_is_unit() {
        use super::*;

        for (theta, phi) in [(0.0, 0.0), (0.5, 1.0), (PI / 2.0, PI), (PI, TAU)] {
            let [x, y, z] = direction(theta, phi);
            assert!(((x * x + y * y + z * z) - 1.0).abs() < 1e-12);
        }
        assert_eq!(direction(0.0, 0.0), [0.0, 0.0, 1.0]);
    }
}
