//! Dense Trit Vectors
//!
//! The canonical hypervector representation: one [`Trit`] per dimension.
//!
//! Ownership is expressed in the type rather than a runtime flag:
//!
//! - [`TritVec`] owns its storage and frees it on drop.
//! - [`TritView`] / [`TritViewMut`] borrow caller storage; dropping a view
//!   never touches the buffer, and the borrow checker keeps the buffer alive
//!   for as long as the view is used.
//!
//! All of them (and plain `[Trit]` slices) implement [`Trits`], which is what
//! the algebra and metric functions accept.

use super::rng::TritRng;
use super::ternary::Trit;
use crate::error::{try_filled, Result, VsaError};
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Elements shown by `Debug` before eliding the rest.
const DEBUG_PREVIEW: usize = 32;

/// Read access to a dense trit sequence.
pub trait Trits {
    /// The elements, in order.
    fn trits(&self) -> &[Trit];

    /// Number of elements; fixed at construction.
    #[inline]
    fn dim(&self) -> usize {
        self.trits().len()
    }

    /// Element `i`, or `None` past the end.
    #[inline]
    fn get(&self, i: usize) -> Option<Trit> {
        self.trits().get(i).copied()
    }

    /// Count of non-zero elements.
    fn nnz(&self) -> usize {
        self.trits().iter().filter(|t| t.is_nonzero()).count()
    }

    /// Fraction of zero elements, `1 - nnz/dim`; 0.0 for an empty vector.
    fn sparsity(&self) -> f64 {
        let dim = self.dim();
        if dim == 0 {
            return 0.0;
        }
        1.0 - self.nnz() as f64 / dim as f64
    }

    /// Copy the elements out as raw `i8` values.
    fn to_i8_vec(&self) -> Vec<i8> {
        self.trits().iter().map(|t| t.to_i8()).collect()
    }
}

/// Write access to a dense trit sequence of fixed length.
pub trait TritsMut: Trits {
    /// The elements, mutably. Length cannot change through this slice.
    fn trits_mut(&mut self) -> &mut [Trit];

    /// Flip the sign of every element in place (zeros stay zero).
    fn negate_in_place(&mut self) {
        for t in self.trits_mut() {
            *t = -*t;
        }
    }

    /// Overwrite element `i`.
    fn set(&mut self, i: usize, t: Trit) -> Result<()> {
        let dim = self.dim();
        let slot = self
            .trits_mut()
            .get_mut(i)
            .ok_or(VsaError::IndexOutOfBounds { index: i, dim })?;
        *slot = t;
        Ok(())
    }
}

impl Trits for [Trit] {
    #[inline]
    fn trits(&self) -> &[Trit] {
        self
    }
}

impl TritsMut for [Trit] {
    #[inline]
    fn trits_mut(&mut self) -> &mut [Trit] {
        self
    }
}

// ============================================================================
// OWNED VECTOR
// ============================================================================

/// Owned dense hypervector.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct TritVec {
    data: Vec<Trit>,
}

impl TritVec {
    /// All-zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Result<Self> {
        Ok(Self {
            data: try_filled(dim, Trit::Z)?,
        })
    }

    /// Uniform random vector from the xorshift stream seeded with `seed`
    /// (`0` draws a seed from entropy).
    ///
    /// # Examples
    ///
    /// ```
    /// use hypertrit::{TritVec, Trits};
    ///
    /// let a = TritVec::random(1000, 42).unwrap();
    /// let b = TritVec::random(1000, 42).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.dim(), 1000);
    /// ```
    pub fn random(dim: usize, seed: u64) -> Result<Self> {
        Self::random_from_rng(dim, &mut TritRng::new(seed))
    }

    /// Random vector drawn from any generator with the same `draw % 3 - 1` mapping.
    pub fn random_from_rng<R: RngCore + ?Sized>(dim: usize, rng: &mut R) -> Result<Self> {
        let mut data = try_filled(dim, Trit::Z)?;
        for t in &mut data {
            *t = Trit::from_draw(rng.next_u64());
        }
        Ok(Self { data })
    }

    /// Deterministic hypervector for a named symbol.
    ///
    /// The generator seed is taken from the SHA-256 digest of `name`, so equal
    /// names always give equal vectors and distinct names give quasi-orthogonal
    /// ones.
    pub fn from_symbol(name: &str, dim: usize) -> Result<Self> {
        Self::random(dim, symbol_seed(0, name))
    }

    /// Copy raw integers, quantizing each to its sign (>0 → +1, <0 → -1, 0 → 0).
    ///
    /// Out-of-range inputs are clamped, never rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypertrit::{TritVec, Trits};
    ///
    /// let v = TritVec::from_values(&[5i32, -3, 0, 1]).unwrap();
    /// assert_eq!(v.to_i8_vec(), vec![1, -1, 0, 1]);
    /// ```
    pub fn from_values<T: Copy + Into<i64>>(values: &[T]) -> Result<Self> {
        let mut data = try_filled(values.len(), Trit::Z)?;
        for (t, &v) in data.iter_mut().zip(values) {
            *t = Trit::clamp(v.into());
        }
        Ok(Self { data })
    }

    /// Take ownership of an existing trit buffer.
    #[inline]
    pub fn from_trits(data: Vec<Trit>) -> Self {
        Self { data }
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())
            .map_err(|_| VsaError::Allocation {
                len: self.data.len(),
            })?;
        data.extend_from_slice(&self.data);
        Ok(Self { data })
    }

    /// Sign-flipped copy; `self` is left untouched.
    pub fn negated(&self) -> Result<Self> {
        let mut out = self.try_clone()?;
        out.negate_in_place();
        Ok(out)
    }

    /// Shared view over this vector's storage.
    #[inline]
    pub fn view(&self) -> TritView<'_> {
        TritView::wrap(&self.data)
    }

    /// Exclusive view over this vector's storage.
    #[inline]
    pub fn view_mut(&mut self) -> TritViewMut<'_> {
        TritViewMut::wrap(&mut self.data)
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Trit] {
        &self.data
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Trit] {
        &mut self.data
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Trit> {
        self.data.iter()
    }

    /// Release the backing buffer to the caller.
    #[inline]
    pub fn into_inner(self) -> Vec<Trit> {
        self.data
    }

    /// Bytes of element storage held by this vector.
    #[inline]
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<Trit>()
    }
}

impl Trits for TritVec {
    #[inline]
    fn trits(&self) -> &[Trit] {
        &self.data
    }
}

impl TritsMut for TritVec {
    #[inline]
    fn trits_mut(&mut self) -> &mut [Trit] {
        &mut self.data
    }
}

impl Index<usize> for TritVec {
    type Output = Trit;

    #[inline]
    fn index(&self, i: usize) -> &Trit {
        &self.data[i]
    }
}

impl IndexMut<usize> for TritVec {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Trit {
        &mut self.data[i]
    }
}

impl From<Vec<Trit>> for TritVec {
    #[inline]
    fn from(data: Vec<Trit>) -> Self {
        Self::from_trits(data)
    }
}

impl FromIterator<Trit> for TritVec {
    fn from_iter<I: IntoIterator<Item = Trit>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TritVec {
    type Item = &'a Trit;
    type IntoIter = std::slice::Iter<'a, Trit>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Debug for TritVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TritVec(dim={}, nnz={}, ", self.dim(), self.nnz())?;
        if self.data.len() > DEBUG_PREVIEW {
            write_trits(f, &self.data[..DEBUG_PREVIEW])?;
            write!(f, "...)")
        } else {
            write_trits(f, &self.data)?;
            write!(f, ")")
        }
    }
}

impl fmt::Display for TritVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_trits(f, &self.data)
    }
}

// ============================================================================
// BORROWED VIEWS
// ============================================================================

/// Shared, non-owning view over caller storage.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TritView<'a> {
    data: &'a [Trit],
}

impl<'a> TritView<'a> {
    /// View `data` without copying.
    #[inline]
    pub fn wrap(data: &'a [Trit]) -> Self {
        Self { data }
    }

    /// Zero-copy view over raw bytes, rejecting any value outside {-1, 0, +1}.
    ///
    /// A view cannot quantize without copying, so invalid input is an error
    /// here rather than being clamped as in [`TritVec::from_values`].
    pub fn from_i8(data: &'a [i8]) -> Result<Self> {
        validate_i8(data)?;
        // SAFETY: `Trit` is `#[repr(i8)]` with discriminants -1, 0 and 1, and
        // every byte was just checked to be one of those, so the slice is a
        // valid `[Trit]` with identical size, alignment and lifetime.
        let data = unsafe { std::slice::from_raw_parts(data.as_ptr().cast::<Trit>(), data.len()) };
        Ok(Self { data })
    }

    /// Owned deep copy of the viewed elements.
    pub fn to_owned_vec(&self) -> Result<TritVec> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())
            .map_err(|_| VsaError::Allocation {
                len: self.data.len(),
            })?;
        data.extend_from_slice(self.data);
        Ok(TritVec { data })
    }

    /// The viewed elements.
    #[inline]
    pub fn as_slice(&self) -> &'a [Trit] {
        self.data
    }
}

impl Trits for TritView<'_> {
    #[inline]
    fn trits(&self) -> &[Trit] {
        self.data
    }
}

impl fmt::Debug for TritView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TritView(dim={})", self.data.len())
    }
}

/// Exclusive, non-owning view over caller storage.
pub struct TritViewMut<'a> {
    data: &'a mut [Trit],
}

impl<'a> TritViewMut<'a> {
    /// View `data` mutably without copying.
    #[inline]
    pub fn wrap(data: &'a mut [Trit]) -> Self {
        Self { data }
    }

    /// Zero-copy mutable view over raw bytes, rejecting values outside {-1, 0, +1}.
    ///
    /// Writes through the view are visible in `data` once the view is dropped.
    pub fn from_i8_mut(data: &'a mut [i8]) -> Result<Self> {
        validate_i8(data)?;
        let len = data.len();
        // SAFETY: as in `TritView::from_i8`; additionally every `Trit` written
        // through the view is itself a valid `i8`, so the caller's buffer stays
        // valid as `[i8]` after the exclusive borrow ends.
        let data = unsafe { std::slice::from_raw_parts_mut(data.as_mut_ptr().cast::<Trit>(), len) };
        Ok(Self { data })
    }

    /// Shared view of the same elements.
    #[inline]
    pub fn as_view(&self) -> TritView<'_> {
        TritView::wrap(&*self.data)
    }
}

impl Trits for TritViewMut<'_> {
    #[inline]
    fn trits(&self) -> &[Trit] {
        &*self.data
    }
}

impl TritsMut for TritViewMut<'_> {
    #[inline]
    fn trits_mut(&mut self) -> &mut [Trit] {
        &mut *self.data
    }
}

impl fmt::Debug for TritViewMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TritViewMut(dim={})", self.data.len())
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn validate_i8(data: &[i8]) -> Result<()> {
    match data.iter().position(|v| !(-1..=1).contains(v)) {
        None => Ok(()),
        Some(index) => {
            #[cfg(feature = "logging")]
            tracing::debug!(index, value = data[index], "refusing to view out-of-domain byte");
            Err(VsaError::InvalidTrit {
                index,
                value: i64::from(data[index]),
            })
        }
    }
}

fn write_trits(f: &mut fmt::Formatter<'_>, trits: &[Trit]) -> fmt::Result {
    for t in trits {
        write!(f, "{t}")?;
    }
    Ok(())
}

/// Generator seed for a named symbol within a seed namespace. Never zero.
pub(crate) fn symbol_seed(namespace: u64, name: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(namespace.to_le_bytes());
    hasher.update(name.as_bytes());
    let hash = hasher.finalize();
    let mut word = [0u8; 8];
    word.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(word).max(1)
}
