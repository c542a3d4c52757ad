#![allow(missing_docs)]

mod hound;
pub(crate) mod util;
mod wav;
