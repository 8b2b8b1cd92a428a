mod simplify_config;

pub use simplify_config::SimplifyConfiguration;
