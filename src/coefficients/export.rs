//! SPH export implementation.

pub use super::*;

use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// The file extension of SPH files.
pub const SPH_EXTENSION: &str = "sph";

/// The channel layout of each SPH record.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, clap::ValueEnum)]
pub enum ChannelLayout {
    /// `r g b`
    #[default]
    Rgb,
    /// `r r r`
    ///
    /// The first channel is written three times,
    /// as the legacy tool does.
    Replicated,
}

impl ChannelLayout {
    #[inline]
    pub const fn arrange(
        &self,
        color: [f64; 3],
    ) -> [f64; 3] {
        match self {
            Self::Rgb => color,
            Self::Replicated => [color[0]; 3],
        }
    }
}

/// SPH exporters
impl ShCoefficients {
    /// Export the coefficients in the SPH format.
    ///
    /// There are nine lines of three space-separated values,
    /// ordered as [`SH_INDICES`].
    pub fn encode_sph(
        &self,
        writer: &mut impl Write,
        layout: ChannelLayout,
    ) -> Result<(), Error> {
        let writer = &mut BufWriter::new(writer);

        for color in self.colors {
            let [r, g, b] = layout.arrange(color);
            writeln!(writer, "{r:.6} {g:.6} {b:.6}")?;
        }
        writer.flush()?;

        Ok(())
    }
}

/// The SPH path derived from `path` by replacing its extension.
///
/// ## Examples
///
/// ```rust
/// use env2sph::coefficients::sph_path;
/// use std::path::Path;
///
/// assert_eq!(sph_path("envmap/uffizi.hdr"), Path::new("envmap/uffizi.sph"));
/// assert_eq!(sph_path("grace.probe.exr"), Path::new("grace.probe.sph"));
/// assert_eq!(sph_path("sky"), Path::new("sky.sph"));
/// ```
#[inline]
pub fn sph_path(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().with_extension(SPH_EXTENSION)
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode_sph_rgb() {
        use super::*;

        let mut colors = [[0.0; 3]; SH_COUNT_MAX];
        colors[0] = [1.5, 0.25, -0.125];
        colors[8] = [0.1234567, 2.0, 1e-9];
        let coefficients = ShCoefficients::new(Basis::Real, colors);

        let mut output = vec![];
        coefficients
            .encode_sph(&mut output, ChannelLayout::Rgb)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        let target = [
            "1.500000 0.250000 -0.125000",
            "0.000000 0.000000 0.000000",
            "0.000000 0.000000 0.000000",
            "0.000000 0.000000 0.000000",
            "0.000000 0.000000 0.000000",
            "0.000000 0.000000 0.000000",
            "0.000000 0.000000 0.000000",
            "0.000000 0.000000 0.000000",
            "0.123457 2.000000 0.000000",
            "",
        ]
        .join("\n");
        assert_eq!(output, target);
    }

    #[test]
    fn encode_sph_replicated() {
        use super::*;

        let mut colors = [[0.0; 3]; SH_COUNT_MAX];
        colors[1] = [0.5, 0.75, 1.0];
        let coefficients = ShCoefficients::new(Basis::Real, colors);

        let mut output = vec![];
        coefficients
            .encode_sph(&mut output, ChannelLayout::Replicated)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), SH_COUNT_MAX);
        assert_eq!(lines[1], "0.500000 0.500000 0.500000");
    }
}
