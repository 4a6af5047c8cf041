//! Cropwise Geo - Zone lookup by coordinate
//!
//! This crate maps a coordinate onto the dataset's zone rectangles and
//! collects the crops recommended for every zone that contains it.

pub mod locator;
pub mod spatial;

pub use locator::{ZoneLocator, ZoneMatch};
