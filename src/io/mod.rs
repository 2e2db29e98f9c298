//! Export of drive layouts

#[cfg(feature = "svg-io")]
mod svg;

#[cfg(feature = "svg-io")]
pub use self::svg::{to_svg, write_svg};
