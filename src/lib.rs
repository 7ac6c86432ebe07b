//! tender-diff — structural diff engine for tender records.
//!
//! This library compares two versions of a structured record (scalars,
//! ordered sequences, and key/value mappings nested arbitrarily) and
//! produces an annotated copy of both versions for visual rendering.
//! Scalar leaves are diffed character by character with a unit-cost
//! edit-distance computation; added and removed keys or list elements
//! are marked wholesale.
//!
//! The core is pure: no I/O, no shared state, one cost matrix per call.
//! Independent diff jobs can run concurrently without locking.
//!
//! # Example
//!
//! ```no_run
//! use tender_diff::{diff, format_result, parse_file, OutputFormat, RenderStyle, ReportOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Parse two snapshot versions of the same record
//! let old = parse_file(Path::new("snapshots/old.json"))?;
//! let new = parse_file(Path::new("snapshots/new.json"))?;
//!
//! // Compute the annotated pair
//! let (old_marked, new_marked) = diff(&old, &new, RenderStyle::Markup)?;
//!
//! // Assemble a report around it
//! let report = format_result(
//!     &old_marked,
//!     &new_marked,
//!     &OutputFormat::Html,
//!     &ReportOptions::default(),
//! )?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod distance;
pub mod error;
pub mod parser;
pub mod record;
pub mod render;
pub mod report;

// Re-export commonly used items for convenience
pub use diff::diff;
pub use distance::{distance, reconstruct, CostMatrix, EditOp};
pub use error::{DiffError, OutputError, ParseError, TenderDiffError};
pub use parser::{parse_file, parse_json, parse_toml, parse_yaml};
pub use record::{Record, Scalar};
pub use render::{render, Annotation, RenderStyle, STYLESHEET};
pub use report::{format_result, OutputFormat, ReportOptions};
