//! # sowgen-doc
//!
//! The document core of sowgen: line-oriented transcoding of generated
//! prose into structured construction commands, and rendering of those
//! commands into a downloadable `.docx`.
//!
//! ## Overview
//!
//! - [`Transcoder`] - walks the generated lines, detects headings, bullet
//!   lists, pipe tables and numbered section anchors, and emits
//!   [`DocCommand`]s; injects the diagram image and cost table at their
//!   anchor points
//! - [`classify_line`] - the single (deliberately swappable) anchor matcher
//! - [`render_docx`] - cover page plus body, in memory
//!
//! Repeated section headings render once, malformed tables are padded
//! rather than panicking, and a missing diagram degrades to a text
//! placeholder.

pub mod anchor;
pub mod command;
pub mod docx;
pub mod error;
pub mod transcoder;

pub use anchor::{AnchorId, classify_line};
pub use command::{Cell, CostRow, DocCommand, Hyperlink, TableBlock};
pub use docx::{DocumentMeta, render_docx};
pub use error::{DocError, Result};
pub use transcoder::{Artifacts, Transcoder};
