//! Geometry for **two-pulley timing-belt drives**.
//!
//! Given a belt (tooth pitch × tooth count) and two pulley diameters, this
//! crate finds the pulley center distance, the external tangents, and the
//! closed belt loop (two wrapped arcs joined by two straight spans). On top of
//! that it places tooth units along the loop, draws sprocket outlines that
//! mesh with the belt, derives belt/sprocket keyframes, and drives a 3D host
//! application through the [`scene::SceneHost`] trait.
//!
//! Everything is a pure function of its inputs; nothing is cached or shared.
//!
//! ```
//! use beltloop::{BeltConfig, BeltLayout};
//!
//! let layout = BeltLayout::compute(&BeltConfig::new(10.0, 150, 300.0, 150.0))?;
//! assert!(layout.path.is_closed());
//! assert!((layout.wrap_length() - 1500.0).abs() < 1e-6);
//! # Ok::<(), beltloop::errors::BeltError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **svg-io**: export a layout as SVG
//!
//! # Logging
//! Computations emit [`tracing`] events (`debug` for intermediate values,
//! `info` for finished layouts, `warn` for overlapping pulleys). Install any
//! subscriber to see them.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod belt;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod motion;
pub mod placement;
pub mod pulley;
pub mod scene;
pub mod sprocket;

pub use belt::{BeltLayout, BeltPath, compute_belt};
pub use config::{BeltConfig, CenterDistanceMethod};
pub use errors::{BeltError, ConfigurationError, GeometryError};
