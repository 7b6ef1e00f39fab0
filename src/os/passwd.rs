//! User database lookups.
//!
//! Unlike [`std::env::home_dir`], nothing here reads `$HOME`.

/// Home directory of the current user according to the password database.
///
/// Built on top of [`libc::getpwuid_r`]. Returns `None` if there is no entry for the current
/// uid, or its home directory is not an UTF-8 string.
#[cfg(unix)]
pub fn home_dir() -> Option<String> {
    use std::ffi::CStr;
    use std::mem::MaybeUninit;
    use std::ptr;

    const MAX_BUF: usize = 1 << 20;

    let mut buf: Vec<libc::c_char> = vec![0; 1024];
    loop {
        let mut passwd = MaybeUninit::<libc::passwd>::uninit();
        let mut result: *mut libc::passwd = ptr::null_mut();
        // SAFETY: `passwd` and `buf` are valid for writes of their respective sizes, and `result`
        // is a valid out pointer. `getuid` cannot fail.
        let rc = unsafe {
            libc::getpwuid_r(
                libc::getuid(),
                passwd.as_mut_ptr(),
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE && buf.len() < MAX_BUF {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() {
            tracing::debug!(rc, "no password database entry for current user");
            return None;
        }
        // SAFETY: On success `result` points to `passwd`, which is now initialized, and its
        // string fields point into `buf`, which outlives this borrow.
        let dir = unsafe { (*result).pw_dir };
        if dir.is_null() {
            return None;
        }
        // SAFETY: `dir` is a non-null, NUL-terminated string inside `buf`.
        let dir = unsafe { CStr::from_ptr(dir) };
        return dir.to_str().ok().map(str::to_owned);
    }
}

#[cfg(not(unix))]
pub fn home_dir() -> Option<String> {
    None
}
