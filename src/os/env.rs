use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Owned snapshot of environmental variables.
///
/// [`Env::default`] is an empty environment, use [`Env::new`] for the process one.
///
/// Everything in [`base_dirs`](crate::base_dirs) reads the environment through this type, so
/// callers (and tests) can hand in a fixed mapping instead of touching process state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: HashMap<OsString, OsString>,
}

/// Errors encountered when getting environmental variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvStrError {
    /// This variant indicates, that variable `Missing.0` is missing.
    #[error("there is no environmental variable `${0:?}`")]
    Missing(OsString),

    /// This variant indicates, that variable `$NonUTF8.0` is not an UTF-8 string.
    #[error("environmental variable `${0:?}` is not an UTF-8 string")]
    NonUTF8(OsString),

    /// This variant indicates, that variable `$Empty.0` is set to an empty string.
    #[error("environmental variable `${0:?}` is empty")]
    Empty(OsString),
}

impl Env {
    /// Snapshot the current process environment.
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `vars` as existing environmental variables.
    pub fn new_from(vars: HashMap<OsString, OsString>) -> Self {
        Self { vars }
    }

    /// Replace the snapshot with `vars`.
    pub fn reload_from(&mut self, vars: HashMap<OsString, OsString>) {
        self.vars = vars;
    }

    /// Replace the snapshot with the current process environment.
    pub fn reload(&mut self) {
        self.reload_from(std::env::vars_os().collect())
    }

    /// Get environmental variable pointed by `key`.
    ///
    /// # Returns
    /// `None` indicates missing key.
    ///
    /// # Examples
    /// ```rust
    /// use basedir::os::env::Env;
    /// use std::ffi::OsStr;
    ///
    /// let env: Env = [("FOO", "bar")].into_iter().collect();
    /// assert_eq!(env.get_os("FOO"), Some(OsStr::new("bar")));
    /// assert_eq!(env.get_os("BAZ"), None);
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// Get environmental variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Returns
    /// `Ok` variant indicates existing UTF-8 variable (possibly empty), `Err` indicates some kind
    /// of error. See [`EnvStrError`] for details.
    ///
    /// # Examples
    /// ```rust,no_run
    /// use basedir::os::env::Env;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let env = Env::new();
    /// let _path = env.get("PATH")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvStrError::Missing(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvStrError::NonUTF8(key.to_os_string()))
    }

    /// Same as [`Env::get`], but a variable set to `""` is reported as [`EnvStrError::Empty`].
    ///
    /// The XDG Base Directory Specification treats empty and unset variables alike, which is
    /// what every resolver in this crate wants.
    pub fn get_non_empty(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvStrError> {
        let key = key.as_ref();
        match self.get(key)? {
            "" => Err(EnvStrError::Empty(key.to_os_string())),
            value => Ok(value),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new_from(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
