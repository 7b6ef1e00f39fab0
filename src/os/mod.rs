//! OS-level inputs.
//!
//! The [`Env`](env::Env) snapshot of environmental variables, and the password database
//! [`home_dir`](passwd::home_dir) used when `$HOME` is missing from it.

pub mod env;
pub mod passwd;
