pub mod codec;
pub mod config;
pub mod geo;
pub mod net;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use codec::{EnumCodec, VariantInfo, VariantInput};
pub use config::toml_config::ExtkitConfig;
pub use geo::{CoordinateUnit, Direction, GeoLocation};
pub use net::IpAddress;
pub use utils::error::{ExtkitError, Result};
