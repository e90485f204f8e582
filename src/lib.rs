#![allow(clippy::excessive_precision)]
#![allow(missing_docs)]

pub mod cli;
pub mod coefficients;
pub mod environment;
pub mod error;
pub mod projector;
pub mod spherical_harmonics;

pub use coefficients::{ChannelLayout, ShCoefficients};
pub use environment::EnvironmentMap;
pub use error::Error;
pub use projector::{ShProjector, ShProjectorConfig};
pub use spherical_harmonics::Basis;
