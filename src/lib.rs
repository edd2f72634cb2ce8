#![cfg_attr(feature = "unstable", feature(likely_unlikely))]

pub static DEBUG: bool = false;

pub use bands::band_of;
pub use cmp::{max, min};
pub use hint::{likely, unlikely};
pub use scan::{find_first, search, NOT_FOUND};

mod bands;
mod cmp;
mod hint;
mod report;
mod scan;
