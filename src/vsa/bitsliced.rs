//! Bitsliced Ternary Vector - Word-parallel VSA Operations
//!
//! The packed dual of [`TritVec`]: the same trit sequence split into a
//! positive and a negative bit-plane, so bind and dot run over whole `u64`
//! words with bitwise logic and population counts.
//!
//! # Representation
//!
//! ```text
//! PackedTritVec:
//!   pos: Vec<u64>  ──→  [p₀p₁p₂...p₆₃|p₆₄p₆₅...p₁₂₇|...]
//!   neg: Vec<u64>  ──→  [n₀n₁n₂...n₆₃|n₆₄n₆₅...n₁₂₇|...]
//!
//! Trit encoding:
//!   - pos bit = 1, neg bit = 0  →  +1 (P)
//!   - pos bit = 0, neg bit = 1  →  -1 (N)
//!   - pos bit = 0, neg bit = 0  →   0 (Z)
//!   - pos bit = 1, neg bit = 1  →  never produced
//! ```
//!
//! Invariants held by every constructor and operation:
//! - both planes hold exactly `ceil(dim / 64)` words;
//! - `pos[w] & neg[w] == 0` for every word;
//! - bits at positions `>= dim` in the last word are clear.
//!
//! # Usage
//!
//! ```
//! use hypertrit::{bind, dot, PackedTritVec, TritVec};
//!
//! let a = TritVec::random(10_000, 1).unwrap();
//! let b = TritVec::random(10_000, 2).unwrap();
//! let pa = PackedTritVec::pack(&a).unwrap();
//! let pb = PackedTritVec::pack(&b).unwrap();
//!
//! assert_eq!(pa.dot(&pb).unwrap(), dot(&a, &b).unwrap());
//! assert_eq!(pa.bind(&pb).unwrap().unpack().unwrap(), bind(&a, &b).unwrap());
//! ```

use super::dense::{TritVec, Trits};
use super::ops::normalize_shift;
use super::similarity::cosine_from_parts;
use super::simd;
use super::ternary::Trit;
use crate::error::{ensure_same_dim, try_filled, Result, VsaError};

/// Bits per plane word.
pub const WORD_BITS: usize = 64;

/// Bitsliced ternary vector for word-parallel VSA operations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PackedTritVec {
    /// Number of logical trits
    dim: usize,
    /// Positive plane: bit i = 1 iff trit i is +1
    pos: Vec<u64>,
    /// Negative plane: bit i = 1 iff trit i is -1
    neg: Vec<u64>,
}

impl PackedTritVec {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// All-zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Result<Self> {
        let words = Self::word_count(dim);
        Ok(Self {
            dim,
            pos: try_filled(words, 0u64)?,
            neg: try_filled(words, 0u64)?,
        })
    }

    /// Pack a dense vector: set the `pos` bit for +1, the `neg` bit for -1.
    pub fn pack<A: Trits + ?Sized>(v: &A) -> Result<Self> {
        let mut out = Self::zeros(v.dim())?;
        for (w, chunk) in v.trits().chunks(WORD_BITS).enumerate() {
            let (mut p, mut n) = (0u64, 0u64);
            for (bit, t) in chunk.iter().enumerate() {
                match t {
                    Trit::P => p |= 1u64 << bit,
                    Trit::N => n |= 1u64 << bit,
                    Trit::Z => {}
                }
            }
            out.pos[w] = p;
            out.neg[w] = n;
        }
        Ok(out)
    }

    /// Build from raw bit-planes, validating every invariant.
    pub fn from_planes(dim: usize, pos: Vec<u64>, neg: Vec<u64>) -> Result<Self> {
        let words = Self::word_count(dim);
        ensure_same_dim(words, pos.len())?;
        ensure_same_dim(words, neg.len())?;

        let tail = Self::last_word_mask(dim);
        for w in 0..words {
            let outside = if w + 1 == words { !tail } else { 0 };
            if pos[w] & neg[w] != 0 || (pos[w] | neg[w]) & outside != 0 {
                #[cfg(feature = "logging")]
                tracing::debug!(word = w, dim, "rejecting malformed bit-planes");
                return Err(VsaError::InvalidPlanes { word: w });
            }
        }
        Ok(Self { dim, pos, neg })
    }

    /// Unpack to the dense form; exact inverse of [`PackedTritVec::pack`].
    pub fn unpack(&self) -> Result<TritVec> {
        let mut out = try_filled(self.dim, Trit::Z)?;
        for (w, chunk) in out.chunks_mut(WORD_BITS).enumerate() {
            let (p, n) = (self.pos[w], self.neg[w]);
            for (bit, t) in chunk.iter_mut().enumerate() {
                *t = Trit::from_planes((p >> bit) & 1 == 1, (n >> bit) & 1 == 1);
            }
        }
        Ok(TritVec::from_trits(out))
    }

    /// Number of u64 words needed for `dim` trits.
    #[inline(always)]
    pub const fn word_count(dim: usize) -> usize {
        dim.div_ceil(WORD_BITS)
    }

    /// Mask for valid bits in the last word.
    #[inline(always)]
    const fn last_word_mask(dim: usize) -> u64 {
        let bits_used = dim % WORD_BITS;
        if bits_used == 0 {
            !0u64
        } else {
            (1u64 << bits_used) - 1
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Number of trits in this vector.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Words per plane.
    #[inline]
    pub fn num_words(&self) -> usize {
        self.pos.len()
    }

    /// Read-only access to positive bit-plane.
    #[inline]
    pub fn pos_plane(&self) -> &[u64] {
        &self.pos
    }

    /// Read-only access to negative bit-plane.
    #[inline]
    pub fn neg_plane(&self) -> &[u64] {
        &self.neg
    }

    /// Trit at index `i`, or `None` past the end.
    #[inline]
    pub fn get(&self, i: usize) -> Option<Trit> {
        if i >= self.dim {
            return None;
        }
        let (word, bit) = (i / WORD_BITS, i % WORD_BITS);
        Some(Trit::from_planes(
            (self.pos[word] >> bit) & 1 == 1,
            (self.neg[word] >> bit) & 1 == 1,
        ))
    }

    /// Overwrite trit `i`, keeping the planes disjoint.
    pub fn set(&mut self, i: usize, t: Trit) -> Result<()> {
        if i >= self.dim {
            return Err(VsaError::IndexOutOfBounds {
                index: i,
                dim: self.dim,
            });
        }
        let (word, mask) = (i / WORD_BITS, 1u64 << (i % WORD_BITS));
        self.pos[word] &= !mask;
        self.neg[word] &= !mask;
        match t {
            Trit::P => self.pos[word] |= mask,
            Trit::N => self.neg[word] |= mask,
            Trit::Z => {}
        }
        Ok(())
    }

    /// Count non-zero trits.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.pos
            .iter()
            .zip(&self.neg)
            .map(|(&p, &n)| (p | n).count_ones() as usize)
            .sum()
    }

    /// Fraction of zero trits; 0.0 for an empty vector.
    pub fn sparsity(&self) -> f64 {
        if self.dim == 0 {
            return 0.0;
        }
        1.0 - self.nnz() as f64 / self.dim as f64
    }

    /// Bytes held by both bit-planes.
    #[inline]
    pub fn memory_bytes(&self) -> usize {
        (self.pos.len() + self.neg.len()) * std::mem::size_of::<u64>()
    }

    // ========================================================================
    // CORE VSA OPERATIONS
    // ========================================================================

    /// Bind (element-wise multiplication), one word at a time.
    ///
    /// Truth table for trit multiply:
    /// ```text
    ///   ×  | P  Z  N
    ///   ---+--------
    ///   P  | P  Z  N
    ///   Z  | Z  Z  Z
    ///   N  | N  Z  P
    /// ```
    ///
    /// Bitwise implementation:
    /// - `out_pos = (a_pos & b_pos) | (a_neg & b_neg)` (same signs → positive)
    /// - `out_neg = (a_pos & b_neg) | (a_neg & b_pos)` (different signs → negative)
    pub fn bind(&self, other: &Self) -> Result<Self> {
        ensure_same_dim(self.dim, other.dim)?;
        let mut out = Self::zeros(self.dim)?;
        simd::bind_words(
            (&self.pos, &self.neg),
            (&other.pos, &other.neg),
            (&mut out.pos, &mut out.neg),
        );
        Ok(out)
    }

    /// Bind into a pre-allocated output of the same dimension.
    pub fn bind_into(&self, other: &Self, out: &mut Self) -> Result<()> {
        ensure_same_dim(self.dim, other.dim)?;
        ensure_same_dim(self.dim, out.dim)?;
        simd::bind_words(
            (&self.pos, &self.neg),
            (&other.pos, &other.neg),
            (&mut out.pos, &mut out.neg),
        );
        Ok(())
    }

    /// Dot product: count matching signs minus opposing signs.
    ///
    /// `dot(a, b) = Σᵢ aᵢ × bᵢ`
    pub fn dot(&self, other: &Self) -> Result<i64> {
        ensure_same_dim(self.dim, other.dim)?;
        let mut acc: i64 = 0;
        for w in 0..self.pos.len() {
            let (ap, an) = (self.pos[w], self.neg[w]);
            let (bp, bn) = (other.pos[w], other.neg[w]);

            let pp = i64::from((ap & bp).count_ones()); // +1 × +1 = +1
            let nn = i64::from((an & bn).count_ones()); // -1 × -1 = +1
            let pn = i64::from((ap & bn).count_ones()); // +1 × -1 = -1
            let np = i64::from((an & bp).count_ones()); // -1 × +1 = -1

            acc += (pp + nn) - (pn + np);
        }
        Ok(acc)
    }

    /// Cosine similarity: normalized dot product, 0.0 against a zero vector.
    pub fn similarity(&self, other: &Self) -> Result<f64> {
        let dot = self.dot(other)?;
        Ok(cosine_from_parts(dot, self.nnz() as u64, other.nnz() as u64))
    }

    /// Cosine similarity of `self` against every row, in row order.
    ///
    /// Fails on the first row whose dimension differs from `self`.
    pub fn batch_similarity(&self, rows: &[PackedTritVec]) -> Result<Vec<f64>> {
        let mut out = try_filled(rows.len(), 0.0f64)?;
        let query_nnz = self.nnz() as u64;
        for (slot, row) in out.iter_mut().zip(rows) {
            let dot = self.dot(row)?;
            *slot = cosine_from_parts(dot, query_nnz, row.nnz() as u64);
        }
        Ok(out)
    }

    /// Number of positions where the trits differ.
    pub fn hamming_distance(&self, other: &Self) -> Result<usize> {
        ensure_same_dim(self.dim, other.dim)?;
        Ok((0..self.pos.len())
            .map(|w| {
                let differ = (self.pos[w] ^ other.pos[w]) | (self.neg[w] ^ other.neg[w]);
                differ.count_ones() as usize
            })
            .sum())
    }

    /// Circular rotation by `shift` positions (positive = rightward).
    ///
    /// Runs in O(words + nnz) by scattering set bits to their new positions.
    pub fn permute(&self, shift: i64) -> Result<Self> {
        let mut out = Self::zeros(self.dim)?;
        if self.dim == 0 {
            return Ok(out);
        }
        let shift = normalize_shift(shift, self.dim);
        scatter_rotated(&self.pos, &mut out.pos, shift, self.dim);
        scatter_rotated(&self.neg, &mut out.neg, shift, self.dim);
        Ok(out)
    }

    /// Negate all trits by swapping the planes.
    #[inline]
    pub fn negate_in_place(&mut self) {
        std::mem::swap(&mut self.pos, &mut self.neg);
    }

    /// Negated copy.
    pub fn negated(&self) -> Result<Self> {
        let mut out = Self::zeros(self.dim)?;
        out.pos.copy_from_slice(&self.neg);
        out.neg.copy_from_slice(&self.pos);
        Ok(out)
    }

    /// Majority bundle of packed vectors; bit-identical to packing the dense bundle.
    pub fn bundle<'a, I>(vectors: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a PackedTritVec>,
    {
        let mut iter = vectors.into_iter();
        let first = iter.next().ok_or(VsaError::Empty { op: "bundle" })?;
        let mut acc = PackedBundle::new(first.dim);
        acc.add(first)?;
        for v in iter {
            acc.add(v)?;
        }
        acc.finish()
    }
}

/// Move every set bit of `src` from position `i` to `(i + shift) % dim`.
fn scatter_rotated(src: &[u64], dst: &mut [u64], shift: usize, dim: usize) {
    for (w, &word) in src.iter().enumerate() {
        let mut m = word;
        while m != 0 {
            let i = w * WORD_BITS + m.trailing_zeros() as usize;
            let j = (i + shift) % dim;
            dst[j / WORD_BITS] |= 1u64 << (j % WORD_BITS);
            m &= m - 1; // Clear lowest set bit
        }
    }
}

// ============================================================================
// MAJORITY BUNDLE ACCUMULATOR
// ============================================================================

/// Exact majority accumulator over packed vectors.
///
/// Keeps a bitsliced binary counter per position for positive votes and one
/// for negative votes: plane `k` holds bit `k` of every position's count.
/// Adding a vector is a ripple-carry increment across the planes, so the
/// count never saturates and the final comparison `pos_votes > neg_votes`
/// reproduces the dense sum-and-threshold rule, ties included.
///
/// # Example
///
/// ```
/// use hypertrit::{PackedBundle, PackedTritVec, TritVec};
///
/// let a = PackedTritVec::pack(&TritVec::from_values(&[1i8, 1, 0]).unwrap()).unwrap();
/// let b = PackedTritVec::pack(&TritVec::from_values(&[1i8, -1, 0]).unwrap()).unwrap();
/// let c = PackedTritVec::pack(&TritVec::from_values(&[-1i8, 0, 0]).unwrap()).unwrap();
///
/// let mut acc = PackedBundle::new(3);
/// for v in [&a, &b, &c] {
///     acc.add(v).unwrap();
/// }
/// let out = acc.finish().unwrap().unpack().unwrap();
/// assert_eq!(out, TritVec::from_values(&[1i8, 0, 0]).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct PackedBundle {
    dim: usize,
    /// Bit-planes of the positive vote counter, least significant first
    pos_count: Vec<Vec<u64>>,
    /// Bit-planes of the negative vote counter, least significant first
    neg_count: Vec<Vec<u64>>,
    /// Number of vectors accumulated
    count: usize,
}

impl PackedBundle {
    /// Create an empty accumulator for vectors of dimension `dim`.
    ///
    /// Counter planes are allocated lazily by [`PackedBundle::add`].
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            pos_count: Vec::new(),
            neg_count: Vec::new(),
            count: 0,
        }
    }

    /// Dimension accepted by [`PackedBundle::add`].
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of vectors accumulated so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Add one vote per non-zero trit of `v`.
    ///
    /// All planes the new count can need are allocated before any vote is
    /// recorded, so a failed call leaves the accumulator unchanged.
    pub fn add(&mut self, v: &PackedTritVec) -> Result<()> {
        ensure_same_dim(self.dim, v.dim)?;
        let words = PackedTritVec::word_count(self.dim);
        let planes = planes_for(self.count + 1);
        grow_planes(&mut self.pos_count, planes, words)?;
        grow_planes(&mut self.neg_count, planes, words)?;

        increment(&mut self.pos_count, &v.pos);
        increment(&mut self.neg_count, &v.neg);
        self.count += 1;
        Ok(())
    }

    /// Resolve the votes: more positive → P, more negative → N, tie → Z.
    pub fn finish(&self) -> Result<PackedTritVec> {
        if self.count == 0 {
            return Err(VsaError::Empty { op: "bundle" });
        }
        let mut out = PackedTritVec::zeros(self.dim)?;
        let planes = self.pos_count.len().max(self.neg_count.len());

        for w in 0..out.pos.len() {
            // Compare the two counters from the most significant plane down.
            let mut gt = 0u64;
            let mut lt = 0u64;
            let mut eq = !0u64;
            for k in (0..planes).rev() {
                let a = self.pos_count.get(k).map_or(0, |p| p[w]);
                let b = self.neg_count.get(k).map_or(0, |p| p[w]);
                gt |= eq & a & !b;
                lt |= eq & !a & b;
                eq &= !(a ^ b);
            }
            out.pos[w] = gt;
            out.neg[w] = lt;
        }
        Ok(out)
    }

    /// Forget all accumulated votes.
    pub fn reset(&mut self) {
        self.pos_count.clear();
        self.neg_count.clear();
        self.count = 0;
    }
}

/// Binary digits needed to hold any count up to `max_count`.
#[inline]
fn planes_for(max_count: usize) -> usize {
    (usize::BITS - max_count.leading_zeros()) as usize
}

/// Append zeroed planes until `counter` has at least `planes`.
///
/// Zero planes never change the stored counts, so stopping early on an
/// allocation failure leaves the counter valid.
fn grow_planes(counter: &mut Vec<Vec<u64>>, planes: usize, words: usize) -> Result<()> {
    while counter.len() < planes {
        counter.push(try_filled(words, 0u64)?);
    }
    Ok(())
}

/// Ripple-carry add of a one-bit-per-position input into a bitsliced counter.
///
/// The counter must already hold enough planes for the incremented count.
fn increment(counter: &mut [Vec<u64>], input: &[u64]) {
    for (w, &bits) in input.iter().enumerate() {
        let mut carry = bits;
        let mut k = 0;
        while carry != 0 {
            let plane = &mut counter[k][w];
            let next = *plane & carry;
            *plane ^= carry;
            carry = next;
            k += 1;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
