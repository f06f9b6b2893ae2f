//! Upward and downward reductions over a tree.
//!
//! Hierarchy algorithms repeatedly need per-node reductions of child values
//! (minimum child altitude, region sizes) and parent-to-child value
//! propagation (parent altitudes, cut labelling). The per-node forms are
//! element-wise over independent sibling sets and run data-parallel; the
//! sequential forms thread values along the topological order.

use rayon::prelude::*;

use crate::error::{CanopyError, Result};

use super::{Inclusion, Tree};

/// An associative, commutative reduction over child values.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Accumulator {
    /// Smallest child value; childless nodes get `f32::INFINITY`.
    Min,
    /// Largest child value; childless nodes get `f32::NEG_INFINITY`.
    Max,
    /// Sum of child values; childless nodes get `0.0`.
    Sum,
}

impl Accumulator {
    fn neutral(self) -> f32 {
        match self {
            Self::Min => f32::INFINITY,
            Self::Max => f32::NEG_INFINITY,
            Self::Sum => 0.0,
        }
    }

    fn combine(self, left: f32, right: f32) -> f32 {
        match self {
            Self::Min => left.min(right),
            Self::Max => left.max(right),
            Self::Sum => left + right,
        }
    }

    fn over(self, values: impl Iterator<Item = f32>) -> f32 {
        values.fold(self.neutral(), |acc, value| self.combine(acc, value))
    }
}

fn check_node_values(tree: &Tree, values: &[f32], what: &'static str) -> Result<()> {
    if values.len() != tree.num_vertices() {
        return Err(CanopyError::ShapeMismatch {
            what,
            expected: tree.num_vertices(),
            actual: values.len(),
        });
    }
    Ok(())
}

/// Reduces the child values of every node: `out[i] = acc(values[children(i)])`.
///
/// Childless nodes receive the accumulator's neutral element. Nodes are
/// independent, so the reduction runs in parallel; results are deterministic
/// for the provided accumulators.
///
/// # Errors
/// Returns [`CanopyError::ShapeMismatch`] when `values` does not have one
/// entry per tree node.
pub fn accumulate_parallel(
    tree: &Tree,
    values: &[f32],
    accumulator: Accumulator,
) -> Result<Vec<f32>> {
    check_node_values(tree, values, "node values")?;
    Ok((0..tree.num_vertices())
        .into_par_iter()
        .map(|node| accumulator.over(tree.children(node).iter().map(|&c| values[c])))
        .collect())
}

/// Folds leaf values upward: leaves copy `leaf_values`, every interior node
/// reduces the already-computed values of its children.
///
/// # Errors
/// Returns [`CanopyError::ShapeMismatch`] when `leaf_values` does not have
/// one entry per leaf.
pub fn accumulate_sequential(
    tree: &Tree,
    leaf_values: &[f32],
    accumulator: Accumulator,
) -> Result<Vec<f32>> {
    if leaf_values.len() != tree.num_leaves() {
        return Err(CanopyError::ShapeMismatch {
            what: "leaf values",
            expected: tree.num_leaves(),
            actual: leaf_values.len(),
        });
    }
    let mut out = vec![0.0f32; tree.num_vertices()];
    out[..leaf_values.len()].copy_from_slice(leaf_values);
    for node in tree.leaves_to_root(Inclusion::Exclude, Inclusion::Include) {
        let folded = accumulator.over(tree.children(node).iter().map(|&c| out[c]));
        out[node] = folded;
    }
    Ok(out)
}

/// Replaces every node's value with its parent's value; the root keeps its
/// own. Element-wise and parallel.
///
/// # Errors
/// Returns [`CanopyError::ShapeMismatch`] when `values` does not have one
/// entry per tree node.
pub fn propagate_parallel(tree: &Tree, values: &[f32]) -> Result<Vec<f32>> {
    check_node_values(tree, values, "node values")?;
    Ok(tree
        .parents()
        .par_iter()
        .map(|&parent| values[parent])
        .collect())
}

/// Conditionally propagates values downward: where `condition[i]` holds,
/// `out[i] = out[parent(i)]`, otherwise `out[i] = values[i]`.
///
/// The root-to-leaves order makes the propagation transitive: a node below a
/// chain of condition-true ancestors receives the value of the nearest
/// condition-false one.
///
/// # Errors
/// Returns [`CanopyError::ShapeMismatch`] when `values` or `condition` does
/// not have one entry per tree node.
pub fn propagate_sequential(tree: &Tree, values: &[f32], condition: &[bool]) -> Result<Vec<f32>> {
    check_node_values(tree, values, "node values")?;
    if condition.len() != tree.num_vertices() {
        return Err(CanopyError::ShapeMismatch {
            what: "condition",
            expected: tree.num_vertices(),
            actual: condition.len(),
        });
    }
    let mut out = values.to_vec();
    for node in tree.root_to_leaves(Inclusion::Include, Inclusion::Exclude) {
        if condition[node] {
            out[node] = out[tree.parent(node)];
        }
    }
    Ok(out)
}
