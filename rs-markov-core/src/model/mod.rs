//! Top-level module for the token chain.
//!
//! This module provides a first-order chain over word tokens, including:
//! - Canonical node identity (`Key`, `Sentinel`)
//! - Weighted edges (`Association`)
//! - Graph vertices with their sampling strategies (`KeyNode`)
//! - Gaussian smoothing of edge weights (`ProbabilityCurve`)
//! - The graph owner with seeding, walks and generation (`Chain`)
//! - Generation configuration (`GenerateOptions`)

/// Graph owner: seeding, lookup, sampling, walks and generation.
pub mod chain;

/// Canonical keys and the `Start` / `End` sentinels.
pub mod key;

/// Graph vertex with forward and backward edge sets.
///
/// Supports weighted, uniform and smoothed sampling in both directions.
pub mod key_node;

/// Weighted edge toward another node.
pub mod association;

/// Gaussian model of a node's edge-weight distribution.
pub mod curve;

/// Generation parameters: length bounds, retry cap and sampling strategy.
pub mod generate_options;
