//! likert-rs: diverging stacked-bar charts for likert-scale survey data.
//!
//! The crate is split in three layers:
//! - `core`: pure layout math turning a `ResponseTable` into centered bar
//!   segments, axis ticks and segment labels.
//! - `api`: explicit configuration, colormaps and the `LikertChart` facade
//!   that drives a `ChartSurface` and a `Renderer`.
//! - `render`: backend-agnostic draw primitives and renderer backends.
//!
//! `survey` loads tables from CSV files, either pre-tabulated or as raw
//! responses to be tallied.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod survey;
pub mod telemetry;

pub use api::{LikertChart, LikertConfig};
pub use crate::core::{DivergingBarLayout, ResponseTable};
pub use error::{LikertError, LikertResult};
