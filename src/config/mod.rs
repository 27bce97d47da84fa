//! Project-level settings.
//!
//! Settings are optional. A `.toolbox.yml` file in the working directory
//! can override the defaults used by `new`, `run` and `heroku init`.
//!
//! # Example
//!
//! ```yaml
//! template: https://github.com/acme/starter/archive/main.tar.gz
//! buildpack: https://github.com/acme/heroku-buildpack-swift
//! executable: Server
//! ```

pub mod settings;

pub use settings::{
    Settings, DEFAULT_BUILDPACK, DEFAULT_EXECUTABLE, DEFAULT_TEMPLATE, SETTINGS_FILE,
};
