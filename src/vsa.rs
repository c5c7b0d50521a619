//! Vector Symbolic Architecture (VSA) Implementation
//!
//! Balanced-ternary hypervectors with algebraic operations:
//! - Bind (⊙): element-wise product, its own inverse
//! - Bundle (⊕): signed-sum majority superposition
//! - Permute (ρ): cyclic rotation for order encoding
//! - Dot, cosine similarity (single or batched) and Hamming distance for retrieval
//!
//! Two representations share these semantics. [`TritVec`] stores one
//! [`Trit`] per byte and works over any [`Trits`] view; [`PackedTritVec`]
//! splits the same sequence into positive/negative `u64` bit-planes.

pub mod bitsliced;
pub mod dense;
pub mod ops;
pub mod rng;
pub mod similarity;
pub mod simd;
pub mod ternary;

pub use bitsliced::{PackedBundle, PackedTritVec, WORD_BITS};
pub use dense::{TritVec, TritView, TritViewMut, Trits, TritsMut};
pub use ops::{analogy, bind, bind_in_place, bind_many, bundle, permute, sequence, unbind};
pub use rng::TritRng;
pub use similarity::{batch_similarity, dot, hamming_distance, similarity};
pub use simd::{has_avx2, has_avx512, simd_features_string};
pub use ternary::Trit;

/// Default dimension of VSA vectors
pub const DIM: usize = 10_000;
