pub mod config;
pub mod error;
pub mod optimizer;
pub mod presets;
pub mod scorer;
pub mod util;
pub mod votes;
// cmd and reports are binary modules (see main.rs).
