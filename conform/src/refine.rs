//! Fixed-point refinement driver.
//!
//! The driver sweeps the interiors of a graph and applies the first applicable
//! [`Rule`] to each, repeating sweeps until a sweep applies nothing. Each rule
//! is re-checked against the current graph immediately before it is applied,
//! because a rewrite promotes vertices and replaces edges around interiors
//! that have not yet been visited.
//!
//! # Examples
//!
//! ```rust
//! use conform::graph::{GraphBuilder, VertexKind};
//! use conform::prelude::*;
//! use conform::refine::{self, RefineParams};
//!
//! let (mut graph, _) = GraphBuilder::default()
//!     .commit_with(|builder| {
//!         builder.insert_vertex("a", VertexKind::Simple, (0.0, 0.0, 0.0))?;
//!         builder.insert_vertex("h", VertexKind::Hanging, (2.0, 0.0, 0.0))?;
//!         builder.insert_vertex("b", VertexKind::Simple, (4.0, 0.0, 0.0))?;
//!         builder.insert_vertex("c", VertexKind::Simple, (2.0, 3.0, 0.0))?;
//!         builder.insert_edge("ah", "a", "h")?;
//!         builder.insert_edge("hb", "h", "b")?;
//!         builder.insert_edge("bc", "b", "c")?;
//!         builder.insert_edge("ca", "c", "a")?;
//!         builder.insert_interior("abc", "a", "b", "c")
//!     })
//!     .unwrap();
//!
//! let report = refine::refine(&mut graph, &RefineParams::default())?;
//! assert!(report.converged);
//! assert_eq!(1, report.applications);
//! assert_eq!(0, report.final_hanging);
//! # Ok::<(), conform::refine::RefineError>(())
//! ```

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::graph::{GraphError, MeshGraph};
use crate::transform::{Rule, Transformation};

/// Errors that can occur during refinement.
#[derive(Debug, Error, PartialEq)]
pub enum RefineError {
    #[error("no rules to apply")]
    NoRules,
    #[error("invalid pass limit: {0} (must be >= 1)")]
    InvalidPassLimit(usize),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type RefineResult<T> = Result<T, RefineError>;

/// Parameters for refinement.
#[derive(Clone, Debug)]
pub struct RefineParams {
    /// Rules to try for each interior, in order.
    pub rules: Vec<Rule>,
    /// Maximum number of sweeps over the interiors of a graph.
    pub max_passes: usize,
}

impl Default for RefineParams {
    fn default() -> Self {
        RefineParams {
            rules: Rule::ALL.to_vec(),
            max_passes: 64,
        }
    }
}

impl RefineParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        self.rules = rules.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    fn validate(&self) -> RefineResult<()> {
        if self.rules.is_empty() {
            return Err(RefineError::NoRules);
        }
        if self.max_passes == 0 {
            return Err(RefineError::InvalidPassLimit(self.max_passes));
        }
        Ok(())
    }
}

/// Summary of a refinement.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RefineReport {
    /// Number of sweeps performed, including the final sweep that applied
    /// nothing when converged.
    pub passes: usize,
    /// Number of rewrites applied.
    pub applications: usize,
    pub initial_interiors: usize,
    pub final_interiors: usize,
    pub initial_hanging: usize,
    pub final_hanging: usize,
    /// `true` if the last sweep applied no rules.
    pub converged: bool,
}

/// Refines a graph until no rule applies to any interior.
///
/// Refinement stops without converging once `max_passes` sweeps have been
/// performed. The graph remains valid in that case and refinement can be
/// resumed by calling this function again.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or if a rewrite fails. A
/// failed rewrite leaves its interior untouched, but rewrites applied before
/// it are kept.
pub fn refine(graph: &mut MeshGraph, params: &RefineParams) -> RefineResult<RefineReport> {
    params.validate()?;

    let initial_interiors = graph.interior_count();
    let initial_hanging = graph.hanging_vertex_count();
    let mut passes = 0;
    let mut applications = 0;
    let mut converged = false;
    while passes < params.max_passes {
        let n = pass(graph, &params.rules)?;
        passes += 1;
        applications += n;
        debug!(
            "refinement pass {}: {} rewrite(s), {} interiors, {} hanging vertices",
            passes,
            n,
            graph.interior_count(),
            graph.hanging_vertex_count()
        );
        if n == 0 {
            converged = true;
            break;
        }
    }
    Ok(RefineReport {
        passes,
        applications,
        initial_interiors,
        final_interiors: graph.interior_count(),
        initial_hanging,
        final_hanging: graph.hanging_vertex_count(),
        converged,
    })
}

/// Sweeps the interiors of a graph once, returning the number of rewrites.
///
/// Interiors are visited in key order. Interiors inserted by rewrites during
/// the sweep are not visited until the next sweep and interiors removed by
/// rewrites are skipped. At most one rule is applied to each interior.
///
/// # Errors
///
/// Returns an error if a rewrite fails.
pub fn pass(graph: &mut MeshGraph, rules: &[Rule]) -> Result<usize, GraphError> {
    let keys: Vec<_> = graph
        .interiors()
        .map(|interior| interior.key().clone())
        .sorted()
        .collect();
    let mut n = 0;
    for key in keys {
        let key = key.as_str();
        if let Some(rule) = rules.iter().find(|rule| rule.is_applicable(graph, key)) {
            rule.apply(graph, key)?;
            n += 1;
        }
    }
    Ok(n)
}
