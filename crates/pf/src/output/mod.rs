//! Output formatting utilities for the pf CLI.
//!
//! This module provides functions for formatting results as text or JSON.
//! It is organized into submodules by command:
//!
//! - [`preview`] - Item preview formatting (visibility, matched block, style)
//! - [`diagnostics`] - Validation report formatting
//! - [`blocks`] - Block listing formatting
//! - [`helpers`] - Common formatting utilities (swatches, severities, truncation)

mod blocks;
mod diagnostics;
pub mod helpers;
mod preview;

// Preview
pub use preview::{format_preview_json, format_preview_table};

// Validation
pub use diagnostics::{format_report_json, format_report_table, report_passes};

// Blocks
pub use blocks::{format_blocks_json, format_blocks_table};
