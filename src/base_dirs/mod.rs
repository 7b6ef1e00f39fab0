//! XDG base directories and file lookup.
//!
//! Every function here takes the environment explicitly as an [`Env`], so resolution is a pure
//! function of that snapshot (and, for [`find`], of the filesystem).
//!
//! ```rust,no_run
//! # use basedir::base_dirs::{find, xdg, SearchCategory};
//! # use basedir::os::env::Env;
//! let env = Env::new();
//!
//! let config_home = xdg::config_home(&env);
//! let candidates = find::find(&env, SearchCategory::Config, "app/settings.toml");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::os::env::Env;
use crate::os::passwd;

pub mod find;
pub mod snapshot;
pub mod xdg;

/// Kind of user files a base directory holds.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Category {
    /// `$XDG_DATA_HOME`.
    Data,
    /// `$XDG_CONFIG_HOME`.
    Config,
    /// `$XDG_STATE_HOME`.
    State,
    /// `$XDG_CACHE_HOME`.
    Cache,
}

/// Categories which also have an ordered list of search directories.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum SearchCategory {
    /// `$XDG_DATA_DIRS`.
    Data,
    /// `$XDG_CONFIG_DIRS`.
    Config,
}

impl Category {
    /// Every category, in the order the XDG Base Directory Specification lists them.
    pub const ALL: [Category; 4] = [
        Category::Data,
        Category::Config,
        Category::State,
        Category::Cache,
    ];

    /// Environmental variable overriding the home directory.
    pub const fn home_var(self) -> &'static str {
        match self {
            Category::Data => "XDG_DATA_HOME",
            Category::Config => "XDG_CONFIG_HOME",
            Category::State => "XDG_STATE_HOME",
            Category::Cache => "XDG_CACHE_HOME",
        }
    }

    /// Home directory used when [`Category::home_var`] is unusable, `~` is the user's home.
    pub const fn home_default(self) -> &'static str {
        match self {
            Category::Data => "~/.local/share",
            Category::Config => "~/.config",
            Category::State => "~/.local/state",
            Category::Cache => "~/.cache",
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Category::Data => "data",
            Category::Config => "config",
            Category::State => "state",
            Category::Cache => "cache",
        }
    }
}

impl SearchCategory {
    /// Every category with search directories.
    pub const ALL: [SearchCategory; 2] = [SearchCategory::Data, SearchCategory::Config];

    /// Environmental variable holding the `:`-separated search directories.
    pub const fn dirs_var(self) -> &'static str {
        match self {
            SearchCategory::Data => "XDG_DATA_DIRS",
            SearchCategory::Config => "XDG_CONFIG_DIRS",
        }
    }

    /// Search directories used when [`SearchCategory::dirs_var`] yields nothing usable.
    pub const fn dirs_default(self) -> &'static [&'static str] {
        match self {
            SearchCategory::Data => &["/usr/local/share/", "/usr/share/"],
            SearchCategory::Config => &["/etc/xdg"],
        }
    }

    /// The [`Category`] whose home directory heads the search path.
    pub const fn category(self) -> Category {
        match self {
            SearchCategory::Data => Category::Data,
            SearchCategory::Config => Category::Config,
        }
    }
}

impl From<SearchCategory> for Category {
    fn from(value: SearchCategory) -> Self {
        value.category()
    }
}

impl TryFrom<Category> for SearchCategory {
    type Error = ParseCategoryError;

    fn try_from(value: Category) -> Result<Self, Self::Error> {
        match value {
            Category::Data => Ok(SearchCategory::Data),
            Category::Config => Ok(SearchCategory::Config),
            Category::State | Category::Cache => {
                Err(ParseCategoryError::NoSearchDirs(value.name()))
            }
        }
    }
}

/// Errors encountered when turning a name into a [`Category`] or [`SearchCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCategoryError {
    /// Name is not one of `data`, `config`, `state`, `cache`.
    #[error("unknown base directory category `{0}`")]
    Unknown(String),

    /// Category exists, but only has a home directory.
    #[error("category `{0}` has no search directories")]
    NoSearchDirs(&'static str),
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category().name())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| ParseCategoryError::Unknown(s.to_owned()))
    }
}

impl FromStr for SearchCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Category>()?.try_into()
    }
}

/// Home directory of the current user, as seen through `env`.
///
/// `$HOME` wins whenever it is set, even to an empty string. Without it (or if it is not UTF-8),
/// the password database is asked, then `/`. Trailing `/` are stripped, so the root directory
/// comes back as an empty string.
fn home_prefix(env: &Env) -> Cow<'_, str> {
    let home: Cow<'_, str> = match env.get("HOME") {
        Ok(home) => home.into(),
        Err(error) => {
            tracing::debug!(%error, "falling back to password database");
            passwd::home_dir().map_or(Cow::Borrowed("/"), Cow::Owned)
        }
    };
    match home {
        Cow::Borrowed(home) => Cow::Borrowed(home.trim_end_matches('/')),
        Cow::Owned(home) => Cow::Owned(home.trim_end_matches('/').to_owned()),
    }
}

/// Expand a leading `~` in `path` to the user's home directory.
pub fn expand_home<'a>(env: &Env, path: &'a str) -> Cow<'a, str> {
    let expanded = shellexpand::tilde_with_context(path, || Some(home_prefix(env)));
    match expanded.as_ref() {
        "" => Cow::Borrowed("/"),
        _ => expanded,
    }
}
