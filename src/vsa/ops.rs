//! Dense VSA algebra: bind, bundle, permute and the compositions built on them.
//!
//! Every function allocates a fresh [`TritVec`] and leaves its inputs alone,
//! except [`bind_in_place`], which writes into a caller buffer.

use super::dense::{TritVec, Trits, TritsMut};
use super::ternary::Trit;
use crate::error::{ensure_same_dim, try_filled, Result, VsaError};

/// Bind (element-wise product): `out[i] = a[i] × b[i]`.
///
/// Non-zero trits are their own inverse, so binding twice with the same
/// zero-free key restores the original. Zeros annihilate and cannot be
/// recovered.
///
/// # Examples
///
/// ```
/// use hypertrit::{bind, TritVec, Trits};
///
/// let a = TritVec::from_values(&[1i8, -1, 0, 1]).unwrap();
/// let b = TritVec::from_values(&[1i8, 1, -1, 0]).unwrap();
/// assert_eq!(bind(&a, &b).unwrap().to_i8_vec(), vec![1, -1, 0, 0]);
/// ```
pub fn bind<A, B>(a: &A, b: &B) -> Result<TritVec>
where
    A: Trits + ?Sized,
    B: Trits + ?Sized,
{
    ensure_same_dim(a.dim(), b.dim())?;
    let mut out = try_filled(a.dim(), Trit::Z)?;
    for ((o, &x), &y) in out.iter_mut().zip(a.trits()).zip(b.trits()) {
        *o = x * y;
    }
    Ok(TritVec::from_trits(out))
}

/// Unbind; identical to [`bind`] because bind is self-inverse.
#[inline]
pub fn unbind<A, B>(bound: &A, key: &B) -> Result<TritVec>
where
    A: Trits + ?Sized,
    B: Trits + ?Sized,
{
    bind(bound, key)
}

/// Bind into a caller-provided buffer: `result[i] = a[i] × b[i]`.
///
/// All three dimensions must agree; on mismatch `result` is left unchanged.
pub fn bind_in_place<R, A, B>(result: &mut R, a: &A, b: &B) -> Result<()>
where
    R: TritsMut + ?Sized,
    A: Trits + ?Sized,
    B: Trits + ?Sized,
{
    ensure_same_dim(a.dim(), b.dim())?;
    ensure_same_dim(a.dim(), result.dim())?;
    for ((o, &x), &y) in result.trits_mut().iter_mut().zip(a.trits()).zip(b.trits()) {
        *o = x * y;
    }
    Ok(())
}

/// Bind a chain of vectors left to right.
pub fn bind_many<'a, V, I>(vectors: I) -> Result<TritVec>
where
    V: Trits + ?Sized + 'a,
    I: IntoIterator<Item = &'a V>,
{
    let mut iter = vectors.into_iter();
    let first = iter.next().ok_or(VsaError::Empty { op: "bind" })?;
    let mut acc = TritVec::from_trits(copy_trits(first)?);
    for v in iter {
        ensure_same_dim(acc.dim(), v.dim())?;
        for (o, &y) in acc.as_mut_slice().iter_mut().zip(v.trits()) {
            *o *= y;
        }
    }
    Ok(acc)
}

/// Bundle (superposition) by per-position majority vote.
///
/// Signed values are summed per position and thresholded: positive → +1,
/// negative → -1, zero → 0. Ties therefore resolve to 0.
///
/// # Examples
///
/// ```
/// use hypertrit::{bundle, TritVec, Trits};
///
/// let a = TritVec::from_values(&[1i8, 1]).unwrap();
/// let b = TritVec::from_values(&[1i8, -1]).unwrap();
/// let c = TritVec::from_values(&[-1i8, 0]).unwrap();
/// assert_eq!(bundle([&a, &b, &c]).unwrap().to_i8_vec(), vec![1, 0]);
/// ```
pub fn bundle<'a, V, I>(vectors: I) -> Result<TritVec>
where
    V: Trits + ?Sized + 'a,
    I: IntoIterator<Item = &'a V>,
{
    let mut iter = vectors.into_iter();
    let first = iter.next().ok_or(VsaError::Empty { op: "bundle" })?;
    let dim = first.dim();

    let mut sums = try_filled(dim, 0i64)?;
    accumulate(&mut sums, first.trits());
    for v in iter {
        ensure_same_dim(dim, v.dim())?;
        accumulate(&mut sums, v.trits());
    }

    threshold(&sums)
}

/// Circular rotation by `shift` positions (positive = rightward).
///
/// Element `i` moves to `(i + shift) mod dim`, with the shift normalized into
/// `[0, dim)` first, so `permute(permute(v, s), -s) == v` for every `s`.
pub fn permute<A: Trits + ?Sized>(v: &A, shift: i64) -> Result<TritVec> {
    let mut out = copy_trits(v)?;
    let dim = out.len();
    if dim > 1 {
        out.rotate_right(normalize_shift(shift, dim));
    }
    Ok(TritVec::from_trits(out))
}

/// Analogy by binding: "a is to b as c is to ?" = `bind(bind(a, b), c)`.
///
/// The mapping `a × b` carries `a` onto `b`; applying it to `c` gives the
/// vector standing in the same relation to `c`.
pub fn analogy<A, B, C>(a: &A, b: &B, c: &C) -> Result<TritVec>
where
    A: Trits + ?Sized,
    B: Trits + ?Sized,
    C: Trits + ?Sized,
{
    let mapping = bind(a, b)?;
    bind(&mapping, c)
}

/// Order-sensitive encoding of a sequence: `bundle(permute(item_i, i))`.
///
/// Each item is rotated by its position before superposition, so the same
/// items in a different order produce a different vector.
pub fn sequence<'a, V, I>(items: I) -> Result<TritVec>
where
    V: Trits + ?Sized + 'a,
    I: IntoIterator<Item = &'a V>,
{
    let mut iter = items.into_iter();
    let first = iter.next().ok_or(VsaError::Empty { op: "sequence" })?;
    let dim = first.dim();

    let mut sums = try_filled(dim, 0i64)?;
    accumulate(&mut sums, first.trits());
    for (offset, item) in iter.enumerate() {
        ensure_same_dim(dim, item.dim())?;
        if dim == 0 {
            continue;
        }
        let shift = (offset + 1) % dim;
        for (i, &t) in item.trits().iter().enumerate() {
            sums[(i + shift) % dim] += i64::from(t);
        }
    }
    threshold(&sums)
}

/// Normalize a signed shift into `[0, dim)`. `dim` must be non-zero.
#[inline]
pub(crate) fn normalize_shift(shift: i64, dim: usize) -> usize {
    // dim fits in i128 losslessly on every supported target.
    (i128::from(shift).rem_euclid(dim as i128)) as usize
}

/// Majority threshold of per-position vote sums.
fn threshold(sums: &[i64]) -> Result<TritVec> {
    let mut out = try_filled(sums.len(), Trit::Z)?;
    for (o, &s) in out.iter_mut().zip(sums) {
        *o = Trit::clamp(s);
    }
    Ok(TritVec::from_trits(out))
}

#[inline]
fn accumulate(sums: &mut [i64], trits: &[Trit]) {
    for (s, &t) in sums.iter_mut().zip(trits) {
        *s += i64::from(t);
    }
}

fn copy_trits<A: Trits + ?Sized>(v: &A) -> Result<Vec<Trit>> {
    let mut out = Vec::new();
    out.try_reserve_exact(v.dim())
        .map_err(|_| VsaError::Allocation { len: v.dim() })?;
    out.extend_from_slice(v.trits());
    Ok(out)
}
