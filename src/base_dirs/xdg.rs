//! XDG Base Directory Specification support.
//!
//! Resolves the per-category home directory and the ordered search directories. Variables
//! that are unset, empty, or hold relative paths are ignored and replaced by the defaults from
//! <https://specifications.freedesktop.org/basedir-spec/latest/>.

use std::path::{Path, PathBuf};

use crate::base_dirs::{Category, SearchCategory, expand_home};
use crate::os::env::{Env, EnvStrError};

/// Read `key` from `env`, keeping it only if it is a non-empty absolute UTF-8 path.
fn absolute_var<'a>(env: &'a Env, key: &str) -> Option<&'a str> {
    match env.get_non_empty(key) {
        Ok(value) if Path::new(value).is_absolute() => Some(value),
        Ok(value) => {
            tracing::debug!(var = key, value, "ignoring relative path");
            None
        }
        Err(error @ EnvStrError::NonUTF8(_)) => {
            tracing::debug!(var = key, %error, "ignoring variable");
            None
        }
        Err(EnvStrError::Missing(_) | EnvStrError::Empty(_)) => None,
    }
}

/// Get the home directory of `category`.
///
/// # Returns
///
/// Value of [`Category::home_var`] if it is an absolute path, otherwise
/// [`Category::home_default`] with `~` expanded (see [`expand_home`]).
pub fn resolve_home(env: &Env, category: Category) -> PathBuf {
    match absolute_var(env, category.home_var()) {
        Some(home) => PathBuf::from(home),
        None => PathBuf::from(expand_home(env, category.home_default()).into_owned()),
    }
}

/// Get the search directories of `category`, most important first.
///
/// # Returns
///
/// Absolute entries of the `:`-separated [`SearchCategory::dirs_var`], in their original order.
/// If there are none, [`SearchCategory::dirs_default`] verbatim. Never empty.
pub fn resolve_dirs(env: &Env, category: SearchCategory) -> Vec<PathBuf> {
    let key = category.dirs_var();
    let dirs: Vec<PathBuf> = match env.get_non_empty(key) {
        Ok(value) => value
            .split(':')
            .filter(|candidate| {
                let absolute = Path::new(candidate).is_absolute();
                if !absolute {
                    tracing::debug!(var = key, candidate, "ignoring relative search directory");
                }
                absolute
            })
            .map(PathBuf::from)
            .collect(),
        Err(error @ EnvStrError::NonUTF8(_)) => {
            tracing::debug!(var = key, %error, "ignoring variable");
            Vec::new()
        }
        Err(EnvStrError::Missing(_) | EnvStrError::Empty(_)) => Vec::new(),
    };

    if dirs.is_empty() {
        tracing::debug!(var = key, "using default search directories");
        category.dirs_default().iter().map(PathBuf::from).collect()
    } else {
        dirs
    }
}

/// Get proper path for `$XDG_DATA_HOME`, defaults to `$HOME/.local/share`.
pub fn data_home(env: &Env) -> PathBuf {
    resolve_home(env, Category::Data)
}

/// Get proper path for `$XDG_CONFIG_HOME`, defaults to `$HOME/.config`.
pub fn config_home(env: &Env) -> PathBuf {
    resolve_home(env, Category::Config)
}

/// Get proper path for `$XDG_STATE_HOME`, defaults to `$HOME/.local/state`.
pub fn state_home(env: &Env) -> PathBuf {
    resolve_home(env, Category::State)
}

/// Get proper path for `$XDG_CACHE_HOME`, defaults to `$HOME/.cache`.
pub fn cache_home(env: &Env) -> PathBuf {
    resolve_home(env, Category::Cache)
}

/// Get proper paths for `$XDG_DATA_DIRS`, defaults to `/usr/local/share/:/usr/share/`.
pub fn data_dirs(env: &Env) -> Vec<PathBuf> {
    resolve_dirs(env, SearchCategory::Data)
}

/// Get proper paths for `$XDG_CONFIG_DIRS`, defaults to `/etc/xdg`.
pub fn config_dirs(env: &Env) -> Vec<PathBuf> {
    resolve_dirs(env, SearchCategory::Config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Env {
        vars.iter().copied().collect()
    }

    fn paths(paths: &[&str]) -> Vec<PathBuf> {
        paths.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn data_home_read_from_environment() {
        let env = env(&[("XDG_DATA_HOME", "/my-data")]);
        assert_eq!(data_home(&env), PathBuf::from("/my-data"));
    }

    #[test]
    fn data_home_default_if_empty() {
        let env = env(&[("HOME", "/home/my-user"), ("XDG_DATA_HOME", "")]);
        assert_eq!(data_home(&env), PathBuf::from("/home/my-user/.local/share"));
    }

    #[test]
    fn data_home_default_if_not_set() {
        let env = env(&[("HOME", "/home/my-user")]);
        assert_eq!(data_home(&env), PathBuf::from("/home/my-user/.local/share"));
    }

    #[test]
    fn data_home_default_if_relative_path() {
        let env = env(&[("HOME", "/home/my-user"), ("XDG_DATA_HOME", "./my-data")]);
        assert_eq!(data_home(&env), PathBuf::from("/home/my-user/.local/share"));
    }

    #[test]
    fn config_home_read_from_environment() {
        let env = env(&[("XDG_CONFIG_HOME", "/my-config")]);
        assert_eq!(config_home(&env), PathBuf::from("/my-config"));
    }

    #[test]
    fn config_home_defaults() {
        for value in [None, Some(""), Some("./my-config"), Some("my-config")] {
            let mut vars = vec![("HOME", "/home/my-user")];
            vars.extend(value.map(|value| ("XDG_CONFIG_HOME", value)));
            assert_eq!(
                config_home(&env(&vars)),
                PathBuf::from("/home/my-user/.config"),
                "XDG_CONFIG_HOME={value:?}"
            );
        }
    }

    #[test]
    fn homes_with_empty_home_variable() {
        let env = env(&[("HOME", "")]);
        assert_eq!(data_home(&env), PathBuf::from("/.local/share"));
        assert_eq!(config_home(&env), PathBuf::from("/.config"));
        assert_eq!(state_home(&env), PathBuf::from("/.local/state"));
        assert_eq!(cache_home(&env), PathBuf::from("/.cache"));
    }

    #[test]
    fn homes_with_root_home_variable() {
        let env = env(&[("HOME", "/"), ("XDG_CONFIG_HOME", "")]);
        assert_eq!(data_home(&env), PathBuf::from("/.local/share"));
        assert_eq!(config_home(&env), PathBuf::from("/.config"));
    }

    #[test]
    fn homes_without_home_variable() {
        let home = crate::os::passwd::home_dir().unwrap_or_default();
        let home = home.trim_end_matches('/');
        let env = env(&[("XDG_DATA_HOME", "relative")]);
        assert_eq!(data_home(&env), PathBuf::from(format!("{home}/.local/share")));
        assert_eq!(config_home(&env), PathBuf::from(format!("{home}/.config")));
    }

    #[test]
    fn state_home_read_from_environment() {
        let env = env(&[("XDG_STATE_HOME", "/my-state")]);
        assert_eq!(state_home(&env), PathBuf::from("/my-state"));
    }

    #[test]
    fn state_home_default_if_relative_path() {
        let env = env(&[("HOME", "/home/my-user"), ("XDG_STATE_HOME", "my-state")]);
        assert_eq!(state_home(&env), PathBuf::from("/home/my-user/.local/state"));
    }

    #[test]
    fn cache_home_read_from_environment() {
        let env = env(&[("XDG_CACHE_HOME", "/my-cache")]);
        assert_eq!(cache_home(&env), PathBuf::from("/my-cache"));
    }

    #[test]
    fn cache_home_default_if_empty() {
        let env = env(&[("HOME", "/home/my-user"), ("XDG_CACHE_HOME", "")]);
        assert_eq!(cache_home(&env), PathBuf::from("/home/my-user/.cache"));
    }

    #[test]
    fn home_override_is_returned_unmodified() {
        let env = env(&[("HOME", "/home/my-user"), ("XDG_DATA_HOME", "/my-data/../x/")]);
        assert_eq!(
            data_home(&env).as_os_str(),
            std::ffi::OsStr::new("/my-data/../x/")
        );
    }

    #[test]
    fn home_override_ignores_home_variable() {
        let env = env(&[("XDG_CACHE_HOME", "/my-cache")]);
        assert_eq!(resolve_home(&env, Category::Cache), PathBuf::from("/my-cache"));
    }

    #[test]
    fn data_dirs_read_from_environment() {
        let env = env(&[("XDG_DATA_DIRS", "/one:/two")]);
        assert_eq!(data_dirs(&env), paths(&["/one", "/two"]));
    }

    #[test]
    fn data_dirs_drops_relative_entries() {
        let env = env(&[("XDG_DATA_DIRS", "./relative-data:/other-data")]);
        assert_eq!(data_dirs(&env), paths(&["/other-data"]));
    }

    #[test]
    fn data_dirs_default_if_all_relative() {
        let env = env(&[("XDG_DATA_DIRS", "./relative-data:./other-relative-data")]);
        assert_eq!(data_dirs(&env), paths(&["/usr/local/share/", "/usr/share/"]));
    }

    #[test]
    fn data_dirs_default_if_not_set_or_empty() {
        assert_eq!(
            data_dirs(&Env::default()),
            paths(&["/usr/local/share/", "/usr/share/"])
        );
        let empty = env(&[("XDG_DATA_DIRS", "")]);
        assert_eq!(data_dirs(&empty), paths(&["/usr/local/share/", "/usr/share/"]));
    }

    #[test]
    fn dirs_skip_empty_segments() {
        let sparse = env(&[("XDG_CONFIG_DIRS", ":/one::/two:")]);
        assert_eq!(config_dirs(&sparse), paths(&["/one", "/two"]));
        let separators_only = env(&[("XDG_CONFIG_DIRS", ":::")]);
        assert_eq!(config_dirs(&separators_only), paths(&["/etc/xdg"]));
    }

    #[test]
    fn dirs_keep_order_and_duplicates() {
        let env = env(&[("XDG_CONFIG_DIRS", "/b:rel:/a:/b")]);
        assert_eq!(config_dirs(&env), paths(&["/b", "/a", "/b"]));
    }

    #[test]
    fn config_dirs_default() {
        let env = env(&[("HOME", "/home/my-user")]);
        assert_eq!(config_dirs(&env), paths(&["/etc/xdg"]));
    }

    #[test]
    fn resolution_is_idempotent() {
        let env = env(&[
            ("HOME", "/home/my-user"),
            ("XDG_DATA_DIRS", "/one:rel:/two"),
        ]);
        assert_eq!(data_home(&env), data_home(&env));
        assert_eq!(data_dirs(&env), data_dirs(&env));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_override_is_ignored() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let env: Env = [
            (OsString::from("HOME"), OsString::from("/home/my-user")),
            (
                OsString::from("XDG_DATA_HOME"),
                OsString::from_vec(b"/data-\xff".to_vec()),
            ),
            (
                OsString::from("XDG_DATA_DIRS"),
                OsString::from_vec(b"/one:/\xff".to_vec()),
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(data_home(&env), PathBuf::from("/home/my-user/.local/share"));
        assert_eq!(data_dirs(&env), paths(&["/usr/local/share/", "/usr/share/"]));
    }
}
