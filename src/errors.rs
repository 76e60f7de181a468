//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`StageError`] covers:
//! - Animation configuration and playback requests
//! - Debug panel control lookups
//! - Actor asset loading
//! - Settings I/O and parsing
//!
//! Animation and panel errors are recoverable: the host logs them and
//! keeps rendering.
//!
//! ```rust,ignore
//! use fox_stage::errors::{StageError, Result};
//!
//! fn switch(controller: &mut AnimationController) -> Result<()> {
//!     controller.play("walking")?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the stage.
#[derive(Error, Debug)]
pub enum StageError {
    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// The animation controller was configured with invalid input.
    #[error("Animation configuration error: {0}")]
    Configuration(String),

    /// A play request named a clip that is not registered.
    #[error("Unknown animation clip: {0}")]
    UnknownClip(String),

    /// An ordered clip list was shorter than the names mapped onto it.
    #[error("Missing animation clip '{name}' at index {index}")]
    MissingClip {
        /// Position expected in the ordered list
        index: usize,
        /// Name that would have been bound to that position
        name: String,
    },

    /// A keyframe track was created without keyframes.
    #[error("Keyframe track for node '{node}' has no keyframes")]
    EmptyTrack {
        /// Node the track animates
        node: String,
    },

    // ========================================================================
    // Debug Panel Errors
    // ========================================================================
    /// No control with that name exists on the panel.
    #[error("Unknown debug control: {0}")]
    UnknownControl(String),

    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The requested asset was not found.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// The asset exists but could not be turned into an actor.
    #[error("Asset load failed: {0}")]
    AssetLoad(String),

    // ========================================================================
    // I/O & Parsing Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl StageError {
    /// Returns `true` for errors the frame loop should log and move past.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StageError::Configuration(_) | StageError::UnknownClip(_) | StageError::UnknownControl(_)
        )
    }
}

/// Alias for `Result<T, StageError>`.
pub type Result<T> = std::result::Result<T, StageError>;
