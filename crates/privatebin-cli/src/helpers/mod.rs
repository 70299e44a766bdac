//! Input helpers for paste text and passwords.

mod input;

pub use input::{read_paste_text, resolve_password};
