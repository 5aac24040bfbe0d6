//! # sowgen-core
//!
//! Session state, stakeholder tables and prompt assembly for the sowgen
//! Scope-of-Work generator.
//!
//! ## Overview
//!
//! This crate provides the foundational types shared by the sowgen workspace:
//!
//! - [`Session`] - All state owned by one generation cycle
//! - [`FormInput`] / [`Branding`] - User-entered fields and cover assets
//! - [`StakeholderTable`] - Editable per-role stakeholder rows
//! - [`sow_prompt`] / [`architecture_prompt`] - Prompt assembly
//! - [`SowError`] / [`Result`] - Unified error handling
//!
//! Session state is an explicit value passed into and returned from each
//! operation; there are no ambient globals, and a failed generation run
//! never loses the entered form data.

pub mod error;
pub mod prompt;
pub mod session;
pub mod stakeholder;

pub use error::{Result, SowError};
pub use prompt::{architecture_prompt, sow_prompt};
pub use session::{Branding, FormInput, Session};
pub use stakeholder::{Stakeholder, StakeholderRole, StakeholderTable};
