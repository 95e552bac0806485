//! Core building blocks: locating the external converter, conversion
//! parameters, and the single-file conversion step used by `batch`.
pub mod convert;
pub mod locator;
pub mod params;
