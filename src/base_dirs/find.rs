//! Looking up files across a category's home and search directories.

use std::path::{Path, PathBuf};

use crate::base_dirs::SearchCategory;
use crate::base_dirs::xdg::{resolve_dirs, resolve_home};
use crate::fs::PathExt;
use crate::os::env::Env;

/// Home directory of `category` followed by its search directories, most important first.
///
/// The home directory always comes first, even if it also appears among the search
/// directories.
pub fn search_path(env: &Env, category: SearchCategory) -> Vec<PathBuf> {
    let mut path = vec![resolve_home(env, category.into())];
    path.extend(resolve_dirs(env, category));
    path
}

fn candidates(
    env: &Env,
    category: SearchCategory,
    filename: impl AsRef<Path>,
) -> impl Iterator<Item = PathBuf> {
    let filename = filename.as_ref().to_path_buf();
    search_path(env, category)
        .into_iter()
        .map(move |dir| dir.join_relative(&filename))
        .filter(|candidate| candidate.is_present())
        .inspect(|found| tracing::trace!(path = %found.display(), "found"))
}

/// Find every existing `filename` within the [`search_path`] of `category`.
///
/// `filename` is always taken relative to each directory, a leading `/` does not escape it.
///
/// # Returns
///
/// Existing paths in priority order. Duplicates are kept, directories without `filename` are
/// skipped, and an empty vector means it exists nowhere.
///
/// # Examples
///
/// ```rust,no_run
/// # use basedir::base_dirs::{find::find, SearchCategory};
/// # use basedir::os::env::Env;
/// let env = Env::new();
/// for path in find(&env, SearchCategory::Data, "applications/mimeapps.list") {
///     println!("{}", path.display());
/// }
/// ```
pub fn find(env: &Env, category: SearchCategory, filename: impl AsRef<Path>) -> Vec<PathBuf> {
    candidates(env, category, filename).collect()
}

/// Like [`find`], but stops at the first hit.
pub fn find_first(
    env: &Env,
    category: SearchCategory,
    filename: impl AsRef<Path>,
) -> Option<PathBuf> {
    candidates(env, category, filename).next()
}

/// [`find`] in `$XDG_DATA_HOME` and `$XDG_DATA_DIRS`.
pub fn find_data(env: &Env, filename: impl AsRef<Path>) -> Vec<PathBuf> {
    find(env, SearchCategory::Data, filename)
}

/// [`find`] in `$XDG_CONFIG_HOME` and `$XDG_CONFIG_DIRS`.
pub fn find_config(env: &Env, filename: impl AsRef<Path>) -> Vec<PathBuf> {
    find(env, SearchCategory::Config, filename)
}

/// [`find_first`] in `$XDG_DATA_HOME` and `$XDG_DATA_DIRS`.
pub fn find_first_data(env: &Env, filename: impl AsRef<Path>) -> Option<PathBuf> {
    find_first(env, SearchCategory::Data, filename)
}

/// [`find_first`] in `$XDG_CONFIG_HOME` and `$XDG_CONFIG_DIRS`.
pub fn find_first_config(env: &Env, filename: impl AsRef<Path>) -> Option<PathBuf> {
    find_first(env, SearchCategory::Config, filename)
}
