//! # valma-merge
//!
//! One-shot transforms over a students root directory:
//! - [`merge`]: four standalone pages per student become one hash-routed
//!   `student.html`, with router code appended to the shared script
//! - [`revert`]: the combined document is split back into standalone pages
//! - [`status`]: report which representation each folder is in
//!
//! Every file access goes through [`valma_core::StudentFs`], so the batch
//! entry points run unchanged against the disk or an in-memory tree.

pub mod batch;
pub mod error;
pub mod marker;
pub mod markup;
pub mod merge;
pub mod options;
pub mod revert;
pub mod status;

pub use batch::{run_merge, run_merge_with, run_revert, run_revert_with};
pub use error::TransformError;
pub use marker::RouterMarker;
pub use merge::merge_folder;
pub use options::TransformOptions;
pub use revert::revert_folder;
pub use status::folder_status;
