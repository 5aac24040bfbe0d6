//! # sowgen-diagram
//!
//! Architecture diagrams for generated Scope-of-Work documents.
//!
//! ## Overview
//!
//! - [`ArchitectureSpec`] - lenient, validated-once model of the
//!   JSON spec produced by the language model (or built deterministically
//!   from a solution pattern)
//! - [`compile`] - pure spec-to-graph compiler with layered clusters and
//!   contiguously numbered call-sequence edges
//! - [`GraphDescription`] - typed graph with a deterministic DOT serializer
//! - [`DiagramRenderer`] - remote graphviz rendering, best-effort
//!
//! A spec with only required fields compiles to the degenerate three-node
//! chain; compilation never fails for a well-formed spec.

pub mod compiler;
pub mod error;
pub mod graph;
pub mod render;
pub mod spec;

pub use compiler::compile;
pub use error::{DiagramError, Result};
pub use graph::{Cluster, Edge, GraphDescription, Node};
pub use render::{DEFAULT_RENDER_URL, DiagramRenderer};
pub use spec::{ArchitectureSpec, EmbeddingsSpec, LlmSpec, OrchestrationSpec, StringList, UiSpec};
