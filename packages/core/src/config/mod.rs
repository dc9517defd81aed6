//! Configuration for locating the template and output files

pub mod paths;

pub use paths::{default_output_path, default_template_path, deploy_dir};
