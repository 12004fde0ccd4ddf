//! Location-annotation parsing and the IR ↔ source line index.
pub mod builder;
pub mod line_map;
pub mod location;

pub use builder::{parse_file, parse_locations, parse_text, ParseResult, ParseStats};
pub use line_map::{lookup_backward, lookup_forward, LineMapping};
pub use location::{LocationDefinition, LocationTable};
