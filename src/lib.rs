//! Wordle Hint
//!
//! Per-letter feedback for a single Wordle guess, rendered as emoji squares.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hint::core::{FeedbackKind, HintRecord};
//!
//! let hint = HintRecord::new(
//!     "apple",
//!     &[
//!         FeedbackKind::Correct,
//!         FeedbackKind::Absent,
//!         FeedbackKind::Absent,
//!         FeedbackKind::Present,
//!         FeedbackKind::Correct,
//!     ],
//! )
//! .unwrap();
//!
//! // A P P L E
//! // 🟩 ⬜ ⬜ 🟨 🟩
//! hint.visualize();
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
