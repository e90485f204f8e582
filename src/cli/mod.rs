//! Command-line interface.

pub use crate::{
    coefficients::{sph_path, ChannelLayout},
    environment::EnvironmentMap,
    error::Error,
    projector::{ShProjectorConfig, PHI_COUNT_DEFAULT, THETA_COUNT_DEFAULT},
    spherical_harmonics::Basis,
};

use clap::{CommandFactory, Parser};
use std::{fs::File, path::PathBuf};

#[derive(Clone, Debug, Parser)]
#[command(
    author,
    version,
    about = "Project an equirectangular environment map onto spherical harmonics"
)]
pub struct Cli {
    /// The environment map to project (HDR, EXR, PNG, ...).
    #[arg(value_name = "INPUT_IMAGE")]
    pub input: Option<PathBuf>,

    /// The SPH file to write [default: INPUT_IMAGE with the extension "sph"]
    #[arg(short, long, value_name = "OUTPUT_SPH")]
    pub output: Option<PathBuf>,

    /// The count of polar angles in the quadrature grid.
    #[arg(long, default_value_t = THETA_COUNT_DEFAULT)]
    pub theta_count: u32,

    /// The count of azimuths in the quadrature grid.
    #[arg(long, default_value_t = PHI_COUNT_DEFAULT)]
    pub phi_count: u32,

    /// The basis to project onto.
    #[arg(long, value_enum, default_value_t = Basis::Real)]
    pub basis: Basis,

    /// The channel layout of each SPH record.
    #[arg(long, value_enum, default_value_t = ChannelLayout::Rgb)]
    pub layout: ChannelLayout,
}

impl Cli {
    /// The projector configuration of the arguments.
    #[inline]
    pub fn config(&self) -> ShProjectorConfig {
        ShProjectorConfig::new()
            .with_basis(self.basis)
            .with_phi_count(self.phi_count)
            .with_theta_count(self.theta_count)
    }

    /// Project the input image and write the SPH file.
    ///
    /// It returns the path of the SPH file,
    /// or prints the usage and returns `None` if there is no input.
    ///
    /// The SPH file is created only after the projection succeeds.
    pub fn run(&self) -> Result<Option<PathBuf>, Error> {
        let Some(input) = &self.input else {
            println!("{}", Self::command().render_usage());
            return Ok(None);
        };
        let output = self.output.to_owned().unwrap_or_else(|| sph_path(input));
        let projector = self.config().init()?;

        log::info!(
            target: "env2sph::cli",
            "Computing harmonics coefficients. Please wait...",
        );

        let map = EnvironmentMap::open(input)?;
        log::info!(
            target: "env2sph::cli",
            "Loaded {input:?} ({} x {}, {})",
            map.width(),
            map.height(),
            map.size_readable(),
        );

        let coefficients = projector.project(&map);

        let mut writer = File::create(&output)?;
        coefficients.encode_sph(&mut writer, self.layout)?;

        log::info!(target: "env2sph::cli", "Finish! Wrote {output:?}");

        Ok(Some(output))
    }
}
