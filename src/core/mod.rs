pub mod axis_ticks;
pub mod centering;
pub mod labels;
pub mod layout;
pub mod middle_split;
pub mod middle_weight;
pub mod normalize;
pub mod primitives;
pub mod scale;
pub mod segments;
pub mod table;
pub mod types;

pub use axis_ticks::{AxisTicks, MAX_RAW_TICKS, NORMALIZED_TICKS, raw_tick_step};
pub use centering::CenteringOffsets;
pub use labels::{SegmentLabel, annotate_segments};
pub use layout::{DivergingBarLayout, LayoutOptions, RowLayout};
pub use middle_split::MiddleSplit;
pub use middle_weight::{mid_weights, row_mid_weight};
pub use normalize::{PercentageMode, cell_percentages, normalize_per_row};
pub use scale::LinearScale;
pub use segments::{BarSegment, build_segments};
pub use table::{MAX_TABLE_TOTAL, ResponseTable};
pub use types::Viewport;
