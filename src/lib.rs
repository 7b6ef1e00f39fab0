//! Basedir - Locate user files following the XDG Base Directory Specification.
//!
//! The functions at the crate root read the real process environment on every call. For
//! anything testable, snapshot it once into an [`Env`](os::env::Env) and use
//! [`base_dirs`] directly.
//!
//! ```rust,no_run
//! for path in basedir::find_config("app/settings.toml") {
//!     println!("{}", path.display());
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::base_dirs::{find, xdg};
use crate::os::env::Env;

pub mod base_dirs;
pub mod fs;
pub mod os;

pub use base_dirs::snapshot::BaseDirs;
pub use base_dirs::{Category, SearchCategory};

/// See [`xdg::data_home`].
pub fn data_home() -> PathBuf {
    xdg::data_home(&Env::new())
}

/// See [`xdg::data_dirs`].
pub fn data_dirs() -> Vec<PathBuf> {
    xdg::data_dirs(&Env::new())
}

/// See [`xdg::config_home`].
pub fn config_home() -> PathBuf {
    xdg::config_home(&Env::new())
}

/// See [`xdg::config_dirs`].
pub fn config_dirs() -> Vec<PathBuf> {
    xdg::config_dirs(&Env::new())
}

/// See [`xdg::state_home`].
pub fn state_home() -> PathBuf {
    xdg::state_home(&Env::new())
}

/// See [`xdg::cache_home`].
pub fn cache_home() -> PathBuf {
    xdg::cache_home(&Env::new())
}

/// See [`find::find_data`].
pub fn find_data(filename: impl AsRef<Path>) -> Vec<PathBuf> {
    find::find_data(&Env::new(), filename)
}

/// See [`find::find_config`].
pub fn find_config(filename: impl AsRef<Path>) -> Vec<PathBuf> {
    find::find_config(&Env::new(), filename)
}
