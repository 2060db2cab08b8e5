#![forbid(unsafe_code)]

pub mod catalog;
pub mod i18n;
pub mod model;
pub mod navigation;
pub mod questions;
pub mod quiz;
pub mod time;

pub use i18n::Locale;
pub use time::Clock;
