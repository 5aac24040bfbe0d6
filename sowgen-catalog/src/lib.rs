//! # sowgen-catalog
//!
//! Static configuration tables for the sowgen generator: solution-name to
//! architecture-pattern mapping, indicative cost breakdowns, AWS pricing
//! calculator links and pre-rendered diagram asset paths.
//!
//! All lookups are total: unknown keys yield an explicit `Option::None` or a
//! documented default, never a panic. The three value tables keep
//! independent key sets — a solution with a diagram asset is not guaranteed
//! a cost entry, and free-text solution names match nothing.

mod cost;
mod pattern;

pub use cost::{CostBreakdown, DEFAULT_CALCULATOR_URL, calculator_link, cost_for, diagram_path};
pub use pattern::{ArchPattern, pattern_for, solution_names};
