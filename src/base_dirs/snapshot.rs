//! All base directories resolved at once.

use std::path::PathBuf;

use crate::base_dirs::xdg;
use crate::os::env::Env;

/// Every base directory, resolved once from the same [`Env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirs {
    /// `$XDG_DATA_HOME` or `~/.local/share`.
    pub data_home: PathBuf,
    /// `$XDG_CONFIG_HOME` or `~/.config`.
    pub config_home: PathBuf,
    /// `$XDG_STATE_HOME` or `~/.local/state`.
    pub state_home: PathBuf,
    /// `$XDG_CACHE_HOME` or `~/.cache`.
    pub cache_home: PathBuf,
    /// `$XDG_DATA_DIRS` or `/usr/local/share/:/usr/share/`.
    pub data_dirs: Vec<PathBuf>,
    /// `$XDG_CONFIG_DIRS` or `/etc/xdg`.
    pub config_dirs: Vec<PathBuf>,
}

impl BaseDirs {
    /// Resolve from the current process environment.
    pub fn current() -> Self {
        Self::from_env(&Env::new())
    }

    /// Resolve every directory from `env`, same as calling each [`xdg`] accessor.
    pub fn from_env(env: &Env) -> Self {
        Self {
            data_home: xdg::data_home(env),
            config_home: xdg::config_home(env),
            state_home: xdg::state_home(env),
            cache_home: xdg::cache_home(env),
            data_dirs: xdg::data_dirs(env),
            config_dirs: xdg::config_dirs(env),
        }
    }
}
