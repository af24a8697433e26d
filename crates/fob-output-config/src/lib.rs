//! Output configuration for the fob bundle writer.
//!
//! [`OutputOptions`] describes where a finished bundle and its companion
//! artifacts land on disk. Options can be built programmatically or loaded
//! from a TOML/JSON file layered with `FOB_OUTPUT_*` environment variables.
//!
//! ```
//! use fob_output_config::{BundleEncoding, OutputOptions};
//!
//! let options = OutputOptions::new("out/app.js")
//!     .bundle_encoding(BundleEncoding::Utf8)
//!     .sourcemap_output("out/app.js.map");
//!
//! assert_eq!(options.meta_output().to_str(), Some("out/app.js.meta"));
//! options.validate().unwrap();
//! ```

pub mod encoding;
pub mod error;
pub mod loading;
pub mod options;
pub mod validation;

pub use encoding::BundleEncoding;
pub use error::*;
pub use loading::ENV_PREFIX;
pub use options::OutputOptions;
