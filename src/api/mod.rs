mod chart;
mod colormap;
mod config;
mod frame_builder;
mod surface;

pub use chart::LikertChart;
pub use colormap::{ColormapConfig, Palette};
pub use config::LikertConfig;
pub use frame_builder::FrameBuilder;
pub use surface::{ChartSurface, LegendEntry};
