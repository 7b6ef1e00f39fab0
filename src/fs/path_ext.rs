use std::path::{Component, Path, PathBuf};

mod sealed {
    use std::path::Path;

    pub trait Sealed {}
    impl Sealed for Path {}
}

/// Extension trait for [`Path`] with the lookups base directory resolution needs.
///
/// ```rust,no_run
/// # use basedir::fs::PathExt;
/// # use std::path::Path;
/// let base = Path::new("/usr/share");
/// let candidate = base.join_relative("/applications/foo.desktop");
/// assert_eq!(candidate, Path::new("/usr/share/applications/foo.desktop"));
/// if candidate.is_present() {
///     println!("found {}", candidate.display());
/// }
/// ```
pub trait PathExt: sealed::Sealed {
    /// Like [`Path::join`], but `rel` never replaces `self`.
    ///
    /// Root and prefix components of `rel` are skipped, so the result always lies below `self`
    /// (modulo `..` components, which are kept as is).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use basedir::fs::PathExt;
    /// # use std::path::Path;
    /// let base = Path::new("/etc/xdg");
    /// assert_eq!(base.join_relative("foo.conf"), Path::new("/etc/xdg/foo.conf"));
    /// assert_eq!(base.join_relative("/foo.conf"), Path::new("/etc/xdg/foo.conf"));
    /// ```
    fn join_relative(&self, rel: impl AsRef<Path>) -> PathBuf;

    /// Returns `true` if something exists at `self`, following symlinks.
    ///
    /// Unlike [`std::fs::exists`], this never fails: an I/O error while checking (e.g. missing
    /// permissions on a parent directory) counts as absence.
    fn is_present(&self) -> bool;
}

impl PathExt for Path {
    fn join_relative(&self, rel: impl AsRef<Path>) -> PathBuf {
        let mut buf = self.to_path_buf();
        buf.extend(
            rel.as_ref()
                .components()
                .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_))),
        );
        buf
    }

    fn is_present(&self) -> bool {
        match std::fs::exists(self) {
            Ok(exists) => exists,
            Err(error) => {
                tracing::debug!(path = %self.display(), %error, "cannot check whether path exists");
                false
            }
        }
    }
}
