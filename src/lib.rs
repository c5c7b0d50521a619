//! Hypertrit - Balanced-Ternary Hypervector Engine
//!
//! Copyright (c) 2025 Hypertrit Contributors
//! Licensed under MIT License
//!
//! Rust implementation of balanced-ternary VSA (Vector Symbolic
//! Architecture) algebra over high-dimensional trit vectors.
//!
//! # Overview
//!
//! Every element of a hypervector is a trit in {-1, 0, +1}. Symbols are
//! random vectors, and structure is expressed algebraically:
//! - **bind** (element-wise product) associates two vectors and is its own inverse
//! - **bundle** (signed-sum majority) superposes several vectors
//! - **permute** (cyclic rotation) encodes position
//! - **dot**, **similarity** (cosine), **batch_similarity** and **hamming_distance**
//!   compare vectors
//!
//! Two representations carry the same semantics:
//! - [`TritVec`] and the borrowed [`TritView`] / [`TritViewMut`]: one byte per trit
//! - [`PackedTritVec`]: positive and negative `u64` bit-planes, word-parallel
//!   bind and popcount metrics
//!
//! # Quick Start
//!
//! ```
//! use hypertrit::{bind, bundle, similarity, TritVec};
//!
//! let dim = 10_000;
//! let color = TritVec::from_symbol("color", dim)?;
//! let red = TritVec::from_symbol("red", dim)?;
//! let shape = TritVec::from_symbol("shape", dim)?;
//! let round = TritVec::from_symbol("round", dim)?;
//!
//! // A record is a bundle of role/filler pairs.
//! let color_red = bind(&color, &red)?;
//! let shape_round = bind(&shape, &round)?;
//! let apple = bundle([&color_red, &shape_round, &color_red])?;
//!
//! // Unbinding the role recovers something close to the filler.
//! let guess = bind(&apple, &color)?;
//! assert!(similarity(&guess, &red)? > similarity(&guess, &round)?);
//! # Ok::<(), hypertrit::VsaError>(())
//! ```
//!
//! # Errors
//!
//! Operations return [`Result`]; combining vectors of unequal dimension is
//! always [`VsaError::DimensionMismatch`], and storage is reserved fallibly
//! so exhaustion surfaces as [`VsaError::Allocation`].
//!
//! # Features
//!
//! - `logging`: emit `tracing` events and expose [`obs::init_logging`]

pub mod backend;
pub mod config;
mod error;
#[cfg(feature = "logging")]
pub mod obs;
pub mod vsa;

// Re-export main types for convenience
pub use backend::{DenseBackend, PackedBackend, VsaBackend};
pub use config::VsaConfig;
pub use error::{Result, VsaError};
pub use vsa::{
    analogy, batch_similarity, bind, bind_in_place, bind_many, bundle, dot, hamming_distance,
    has_avx2, has_avx512, permute, sequence, similarity, simd_features_string, unbind,
    PackedBundle, PackedTritVec, Trit, TritRng, TritVec, TritView, TritViewMut, Trits, TritsMut,
    DIM,
};

/// Version of this crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
