//! This is the documentation for the **prism** software package.
//!
//! It models the dispersion of white light in a triangular glass prism. A single incoming ray hits the
//! first prism face at a fixed entry point and splits into a red and a violet ray, which are refracted
//! using Snell's law at both prism faces. The results are returned as plain data and may be rendered
//! by any frontend.
//!
//! The main entry point is [`PrismOpticsModel::compute`].
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod error;
pub mod model;
pub mod prism;
pub mod ray_path;
pub mod refractive_index;
pub mod report;
pub mod scene_document;
pub mod utils;
pub mod viewport;
pub mod wavelength;

pub use model::{PrismOpticsModel, PrismScene};

use chrono::DateTime;

/// Return the version information of the currently built prism executable.
///
/// This function returs a `String` which contains the current Git tag/hash combination as well as
/// the timestamp of this commit.
#[must_use]
pub fn get_version() -> String {
    let timestamp = DateTime::parse_from_rfc3339(env!("VERGEN_GIT_COMMIT_TIMESTAMP")).map_or_else(
        |_| String::from("invalid timestamp"),
        |timestamp| timestamp.format("%Y/%m/%d %H:%M").to_string(),
    );
    format!("{} ({})", env!("VERGEN_GIT_DESCRIBE"), timestamp)
}
#[cfg(test)]
mod test {
    use super::*;
    use regex::Regex;
    #[test]
    fn get_ver() {
        let version_string = get_version();
        let re = Regex::new(r"(.*) \((\d{4}/\d{2}/\d{2} \d{2}:\d{2}|invalid timestamp)\)").unwrap();
        assert!(re.is_match(&version_string));
    }
}
