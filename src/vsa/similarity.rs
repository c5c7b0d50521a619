//! Similarity metrics over dense vectors.
//!
//! Each metric makes one pass over its operands and fails with
//! `DimensionMismatch` when the dimensions differ.

use super::dense::Trits;
use crate::error::{ensure_same_dim, Result, VsaError};

/// Signed dot product `Σᵢ aᵢ × bᵢ`.
pub fn dot<A, B>(a: &A, b: &B) -> Result<i64>
where
    A: Trits + ?Sized,
    B: Trits + ?Sized,
{
    ensure_same_dim(a.dim(), b.dim())?;
    Ok(a.trits()
        .iter()
        .zip(b.trits())
        .map(|(&x, &y)| i64::from((x * y).to_i8()))
        .sum())
}

/// Cosine similarity `dot(a, b) / (‖a‖ × ‖b‖)`, in `[-1, 1]`.
///
/// Returns 0.0 when either vector is all zeros. For trits `‖v‖² = nnz(v)`,
/// and the denominator is taken as `sqrt(nnz(a) × nnz(b))` so that
/// `similarity(a, a)` is exactly 1.0.
///
/// # Examples
///
/// ```
/// use hypertrit::{similarity, TritVec};
///
/// let a = TritVec::random(2048, 1).unwrap();
/// assert_eq!(similarity(&a, &a).unwrap(), 1.0);
///
/// let zero = TritVec::zeros(2048).unwrap();
/// assert_eq!(similarity(&a, &zero).unwrap(), 0.0);
/// ```
pub fn similarity<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: Trits + ?Sized,
    B: Trits + ?Sized,
{
    ensure_same_dim(a.dim(), b.dim())?;
    let mut dot = 0i64;
    let mut norm_a = 0u64;
    let mut norm_b = 0u64;
    for (&x, &y) in a.trits().iter().zip(b.trits()) {
        dot += i64::from((x * y).to_i8());
        norm_a += u64::from(x.is_nonzero());
        norm_b += u64::from(y.is_nonzero());
    }
    Ok(cosine_from_parts(dot, norm_a, norm_b))
}

/// Cosine similarity of one query against every row, in row order.
///
/// Each entry equals `similarity(query, row)`; the query's norm is counted
/// once. Fails on the first row whose dimension differs from the query.
///
/// # Examples
///
/// ```
/// use hypertrit::{batch_similarity, TritVec};
///
/// let query = TritVec::from_symbol("cat", 1024).unwrap();
/// let vocab = vec![
///     TritVec::from_symbol("dog", 1024).unwrap(),
///     query.clone(),
///     TritVec::zeros(1024).unwrap(),
/// ];
/// let scores = batch_similarity(&query, &vocab).unwrap();
/// assert_eq!(scores.len(), 3);
/// assert_eq!(&scores[1..], &[1.0, 0.0]);
/// ```
pub fn batch_similarity<Q, V>(query: &Q, rows: &[V]) -> Result<Vec<f64>>
where
    Q: Trits + ?Sized,
    V: Trits,
{
    let mut out = Vec::new();
    out.try_reserve_exact(rows.len())
        .map_err(|_| VsaError::Allocation { len: rows.len() })?;

    let q = query.trits();
    let norm_q = query.nnz() as u64;
    for row in rows {
        ensure_same_dim(q.len(), row.dim())?;
        let mut dot = 0i64;
        let mut norm_r = 0u64;
        for (&x, &y) in q.iter().zip(row.trits()) {
            dot += i64::from((x * y).to_i8());
            norm_r += u64::from(y.is_nonzero());
        }
        out.push(cosine_from_parts(dot, norm_q, norm_r));
    }
    Ok(out)
}

/// Number of positions where the operands differ.
pub fn hamming_distance<A, B>(a: &A, b: &B) -> Result<usize>
where
    A: Trits + ?Sized,
    B: Trits + ?Sized,
{
    ensure_same_dim(a.dim(), b.dim())?;
    Ok(a.trits()
        .iter()
        .zip(b.trits())
        .filter(|(x, y)| x != y)
        .count())
}

/// Cosine from a dot product and the squared norms (non-zero counts).
#[inline]
pub(crate) fn cosine_from_parts(dot: i64, norm_sq_a: u64, norm_sq_b: u64) -> f64 {
    if norm_sq_a == 0 || norm_sq_b == 0 {
        return 0.0;
    }
    dot as f64 / (norm_sq_a as f64 * norm_sq_b as f64).sqrt()
}
