// crates/guidfmt-config/src/lib.rs
// ============================================================================
// Module: guidfmt Config Library
// Description: Canonical config model and validation for the guidfmt CLI.
// Purpose: Single source of truth for guidfmt.toml semantics.
// Dependencies: guidfmt-core, serde, toml
// ============================================================================

//! ## Overview
//! `guidfmt-config` defines the configuration model for the `guidfmt`
//! binary: the default layout and the output limits, loaded from TOML with
//! strict validation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
