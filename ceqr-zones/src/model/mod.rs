pub mod census;
pub mod source;
pub mod zone;
mod zone_cli_error;
mod zone_error;

pub use zone_cli_error::ZoneCliError;
pub use zone_error::ZoneError;
