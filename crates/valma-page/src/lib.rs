//! # valma-page
//!
//! Behavior of the combined student document once it is loaded in a browser,
//! expressed as plain data so it can be checked and rendered from Rust:
//! - [`router`]: hash -> visible section, active menu entries
//! - [`page`]: per-section initializers, search, quick menu, notifications
//! - [`streak`]: streak tiers and badge icons
//! - [`attendance`]: home attendance list, status counts, lateness cutoff
//! - [`calendar`]: month grid and record list

pub mod attendance;
pub mod calendar;
pub mod error;
pub mod page;
pub mod router;
pub mod streak;

pub use error::PageError;
pub use page::{PageInit, initialize_page};
pub use router::{ActiveSection, resolve_section};
pub use streak::{StreakBadge, StreakTier};
