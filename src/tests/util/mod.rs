pub mod polygon;
mod check;

pub use check::{assert_area_matches, assert_covers};
