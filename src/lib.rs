//! `swarmopt` provides a particle swarm optimizer (PSO) with a decaying inertia weight,
//! per-component velocity clamping, and an immutable snapshot of the swarm after every
//! iteration. The optimizer owns all of its state, so plotting, logging, and convergence checks
//! are written as consumers of [`SwarmSnapshot`]s rather than reaching into the update loop.
//!
//! # Table of Contents
//! - [Key Features](#key-features)
//! - [Quick Start](#quick-start)
//! - [Update Rule](#update-rule)
//! - [Edge Cases](#edge-cases)
//!
//! # Key Features
//! * A single [`SwarmOptimizer`] type with [`SwarmOptimizer::step`] and a lazy
//!   [`SwarmOptimizer::run`] iterator.
//! * Objective functions are pluggable through the [`CostFunction`] trait, which is
//!   implemented for plain closures.
//! * Seedable randomness through the [`SampleFloat`](utils::SampleFloat) trait, implemented for
//!   [`fastrand::Rng`].
//! * A [`SwarmMinimizer`] driver with [`SwarmObserver`]s and [`AbortSignal`]s. Pressing `Ctrl-C`
//!   with a [`CtrlCAbortSignal`] still yields a [`SwarmSummary`], but its message will indicate
//!   that the run was aborted.
//!
//! # Quick Start
//!
//! The [`test_functions`] module contains the Himmelblau function used below:
//!
//! ```rust
//! use swarmopt::prelude::*;
//! use swarmopt::test_functions::Himmelblau;
//!
//! let mut pso = SwarmOptimizer::new(Himmelblau, 2, 40, (-5.0, 5.0), PSOConfig::default(), 0)
//!     .unwrap();
//! let snapshots: Vec<SwarmSnapshot> = pso.run(40).collect();
//! assert_eq!(snapshots.len(), 40);
//! assert!(snapshots[39].gbest.fx < 1.0);
//! ```
//!
//! Closures work too:
//!
//! ```rust
//! use swarmopt::prelude::*;
//! use swarmopt::{DVector, Float};
//!
//! let sphere = |x: &DVector<Float>| x.norm_squared();
//! let mut pso = SwarmOptimizer::new(sphere, 3, 20, (-1.0, 1.0), PSOConfig::default(), 7).unwrap();
//! let last = pso.run(30).last().unwrap();
//! assert!(last.gbest.fx < 0.1);
//! ```
//!
//! # Update Rule
//!
//! Every step first evaluates all particles (updating personal and global bests in particle
//! order), then moves them:
//!
//! ```math
//! v_i^{t+1} = \omega_t v_i^t + c_1 q (p_i - x_i^t) + c_2 r (g - x_i^t)
//! ```
//! ```math
//! x_i^{t+1} = x_i^t + \text{clamp}(v_i^{t+1}, -v_\text{max}, v_\text{max})
//! ```
//! ```math
//! \omega_{t+1} = \max(\beta\,\omega_t, \omega_\text{min})
//! ```
//! where $`q, r \sim U[0, 1)`$ are drawn once per particle and shared across its dimensions.
//!
//! # Edge Cases
//!
//! * Positions are never clamped to the initial bounds, so particles may leave the search box.
//! * Objective values of `NaN` never compare less than a stored best, so they are ignored by
//!   best tracking. They are not otherwise sanitized.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing the [`Point`], [`Bounds`], configuration, and summary types
pub mod core;
/// Module containing the [`SwarmError`] type
pub mod error;
/// Module containing [`SwarmObserver`] implementations
pub mod observers;
/// Module containing the swarm optimizer and its driver
pub mod swarms;
/// Module containing standard functions for testing algorithms
pub mod test_functions;
/// Module containing the [`CostFunction`], [`AbortSignal`], and [`SwarmObserver`] traits
pub mod traits;
/// Random sampling helpers
pub mod utils;

pub use nalgebra::DVector;

pub use crate::core::{
    AtomicAbortSignal, Bound, Bounds, CtrlCAbortSignal, InertiaSchedule, NopAbortSignal,
    PSOConfig, Point, SwarmSummary,
};
pub use error::SwarmError;
pub use swarms::{Particle, SwarmMinimizer, SwarmOptimizer, SwarmRun, SwarmSnapshot};
pub use traits::{AbortSignal, CostFunction, SwarmObserver};

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes
pub mod prelude {
    pub use crate::{
        AbortSignal, Bounds, CostFunction, PSOConfig, Point, SwarmError, SwarmMinimizer,
        SwarmObserver, SwarmOptimizer, SwarmSnapshot, SwarmSummary,
    };
}

/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled)
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled)
#[cfg(feature = "f32")]
pub type Float = f32;

/// The mathematical constant $`\pi`$.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;

/// The mathematical constant $`\pi`$.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;
