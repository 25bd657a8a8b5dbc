//! Land plot measurement core
//!
//! Geometry engine for parcels traced as straight-line segments over a plot
//! drawing: polygon closure, drawing-space area and conversion to square
//! meters from the lengths declared on each segment.

pub mod area;
pub mod bundle;
pub mod measurement;
pub mod scaling;
pub mod segment;
pub mod settings;
pub mod vertices;

pub use area::polygon_area;
pub use bundle::{BundleError, MeasurementBundle};
pub use measurement::{declared_perimeter, measure_parcel, pixel_perimeter, ParcelMeasurement};
pub use scaling::{
    is_rectangle, mean_pixel_ratio, scale_to_real_world, select_strategy, AreaStrategy,
    RECTANGLE_TOLERANCE_M,
};
pub use segment::{euclidean_distance, Point, Segment, SegmentError, SegmentId};
pub use settings::{PlotSettings, SettingsError, DEFAULT_SCALE, DEFAULT_SEGMENT_LENGTH};
pub use vertices::{
    check_connectivity, extract_vertices, ConnectivityGap, DEFAULT_CONNECTIVITY_TOLERANCE,
};
