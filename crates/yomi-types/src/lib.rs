pub mod types;

pub use types::{DisplayMode, ExportFormat, LayoutMode, Segmentation, StyleParams};
