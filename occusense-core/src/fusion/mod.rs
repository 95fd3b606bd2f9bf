//! Probability Fusion for Multi-Sensor Occupancy Evidence
//!
//! ## Overview
//!
//! This module turns a set of entity evidence models into a single
//! occupancy probability. Two independent combiners are provided:
//!
//! 1. **Logistic fusion** ([`logistic`]): a weighted sigmoid model that
//!    accumulates evidence contributions in log-odds space. Fast,
//!    monotone, and robust to miscalibrated likelihoods - the primary
//!    engine for live presence scoring.
//! 2. **Bayesian combination** ([`bayes`]): a log-space naive-Bayes
//!    posterior over the same entities, used where a principled
//!    posterior (not a logistic score) is required. Supports continuous
//!    density likelihoods.
//!
//! ## Why two engines?
//!
//! The logistic model treats inactive sensors as silent (zero
//! contribution), which matches how rooms actually behave: an idle
//! motion sensor says little when someone is reading. The Bayesian model
//! treats inactivity as evidence of absence via complement likelihoods -
//! statistically purer, but punishing under partial sensor coverage.
//! Callers pick per use case.
//!
//! ```text
//! Entities ──┬─→ presence_probability ──┐
//!            │                          ├─→ combined_probability ─→ boost
//!            └─→ environmental_confidence┘
//! ```
//!
//! ## Numerical Stability
//!
//! - `sigmoid` branches on the sign of `z` to avoid `exp` overflow
//! - `logit` operates on band-clamped inputs only
//! - the Bayesian combiner normalizes by the max log accumulator before
//!   exponentiating, and falls back to the prior on double underflow

pub mod bayes;
pub mod logistic;

pub use bayes::bayesian_probability;
pub use logistic::{
    apply_activity_boost, clamp_probability, combined_probability,
    environmental_confidence, logit, presence_probability, round_probability, sigmoid,
    sigmoid_probability,
};
