// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

/// Base URL used when no configuration file exists yet.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/images";

// ==========================================================================
// Lightbox Transition Defaults
// ==========================================================================

/// Fade-out phase of a lightbox transition, in milliseconds. The selection
/// swaps to its neighbor once this delay elapses.
pub const TRANSITION_FADE_MS: u64 = 150;

/// Settle phase of a lightbox transition, in milliseconds. The transition
/// state ends once this delay elapses after the selection swap.
pub const TRANSITION_SETTLE_MS: u64 = 50;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Number of thumbnail columns in grid view.
pub const GRID_COLUMNS: usize = 4;
