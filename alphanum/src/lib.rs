//! Alphanumeric ("natural") string ordering: digit runs compare by magnitude, so
//! `"item2"` sorts before `"item10"`.

mod alphanum;
mod alphanum_cmp;
mod alphanum_sort_ext;
mod chunk;
mod error;

pub use alphanum::Alphanum;
pub use alphanum_cmp::{alphanum_cmp, alphanum_cmp_bytes, try_alphanum_cmp};
pub use alphanum_sort_ext::AlphanumSortExt;
pub use chunk::{next_chunk, same_kind};
pub use error::{Error, Operand};
