//! # MindCare calendar core
//!
//! The calendar component behind the student and doctor calendar screens:
//! a month grid with appointment markers, the selected-day appointment
//! list, and the appointment accept/reject flow.
//!
//! ## Architecture
//!
//! ```text
//! Rendering surface (screens)
//!     ↓
//! Domain (grid, day matching, lookup, view state, review)
//!     ↓
//! Storage (injected appointment source)
//! ```
//!
//! All operations are synchronous and run to completion on the caller's
//! thread; a `CalendarService` belongs to exactly one mounted screen.

pub mod config;
pub mod domain;
pub mod storage;

pub use config::{ConfigError, ScreenConfig};
pub use domain::*;
pub use storage::*;
