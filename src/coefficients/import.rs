//! SPH import implementation.

pub use super::*;

use std::io::{BufRead, BufReader, Read};

/// SPH importers
impl ShCoefficients {
    /// Import the coefficients in the SPH format.
    ///
    /// The file does not record its basis, so it is given as `basis`.
    /// Blank lines are skipped.
    pub fn decode_sph(
        reader: &mut impl Read,
        basis: Basis,
    ) -> Result<Self, Error> {
        let reader = BufReader::new(reader);

        let mut colors = [[0.0; 3]; SH_COUNT_MAX];
        let mut record_count = 0;
        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let values = line
                .split_whitespace()
                .map(str::parse::<f64>)
                .collect::<Result<Vec<_>, _>>()?;
            match (colors.get_mut(record_count), values.as_slice()) {
                (Some(color), &[r, g, b]) => *color = [r, g, b],
                _ => return Err(Error::MismatchedSphRecord(line_index + 1, line)),
            }
            record_count += 1;
        }

        if record_count != SH_COUNT_MAX {
            return Err(Error::Validation(
                format!("The SPH record count ({record_count})"),
                format!("{SH_COUNT_MAX}"),
            ));
        }

        Ok(Self::new(basis, colors))
    }
}
