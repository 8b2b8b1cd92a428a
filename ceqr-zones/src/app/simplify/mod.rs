mod output_format;
mod simplify_ops;
mod simplify_report;

pub use output_format::OutputFormat;
pub use simplify_ops::{assign, load_blocks, load_tracts, load_zones, run, Assignment};
pub use simplify_report::SimplifyReport;
