//! # valma-core
//!
//! Core types shared by every VALMAtrack crate:
//! - Section and folder-state enums
//! - Student folder layout (file names, ids, markers)
//! - The `StudentFs` filesystem seam with disk and in-memory backends
//! - Batch and status response types
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod fs;
pub mod layout;
pub mod responses;

pub use enums::{BatchOperation, FolderState, OutcomeStatus, Section};
pub use errors::CoreError;
pub use fs::{DiskFs, MemoryFs, StudentFs};
pub use layout::StudentFolder;
