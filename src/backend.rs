//! Representation-agnostic VSA operations.
//!
//! [`VsaBackend`] captures the algebraic contract (bind, bundle, permute and
//! the metrics) so callers can move between the dense and the packed
//! representation without code changes. Both backends return identical
//! results for identical inputs.

use crate::error::Result;
use crate::vsa::{self, PackedBundle, PackedTritVec, TritVec};

/// Backend-agnostic VSA operations over vectors of one fixed dimension.
pub trait VsaBackend {
    type Vector: Clone + Send + Sync + 'static;

    /// Dimension of every vector this backend produces.
    fn dim(&self) -> usize;

    /// All-zero vector.
    fn zero(&self) -> Result<Self::Vector>;

    /// Deterministic random vector; seed 0 draws from entropy.
    fn random(&self, seed: u64) -> Result<Self::Vector>;

    /// Element-wise product; binding with the same key again undoes it.
    fn bind(&self, a: &Self::Vector, b: &Self::Vector) -> Result<Self::Vector>;

    /// Signed-sum majority of the inputs, ties to zero; empty input is an error.
    fn bundle(&self, vectors: &[&Self::Vector]) -> Result<Self::Vector>;

    /// Circular rotation by `shift` positions (positive = rightward).
    fn permute(&self, v: &Self::Vector, shift: i64) -> Result<Self::Vector>;

    /// Signed dot product.
    fn dot(&self, a: &Self::Vector, b: &Self::Vector) -> Result<i64>;

    /// Cosine similarity, 0.0 against a zero vector.
    fn cosine(&self, a: &Self::Vector, b: &Self::Vector) -> Result<f64>;

    /// Cosine similarity of `query` against every row, in row order.
    fn batch_cosine(&self, query: &Self::Vector, rows: &[Self::Vector]) -> Result<Vec<f64>>;

    /// Number of differing positions.
    fn hamming(&self, a: &Self::Vector, b: &Self::Vector) -> Result<usize>;
}

/// One byte per trit; works with every dense view in the crate.
#[derive(Clone, Copy, Debug)]
pub struct DenseBackend {
    dim: usize,
}

impl DenseBackend {
    /// Backend producing vectors of dimension `dim`.
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Default for DenseBackend {
    fn default() -> Self {
        Self::new(vsa::DIM)
    }
}

impl VsaBackend for DenseBackend {
    type Vector = TritVec;

    fn dim(&self) -> usize {
        self.dim
    }

    fn zero(&self) -> Result<Self::Vector> {
        TritVec::zeros(self.dim)
    }

    fn random(&self, seed: u64) -> Result<Self::Vector> {
        TritVec::random(self.dim, seed)
    }

    fn bind(&self, a: &Self::Vector, b: &Self::Vector) -> Result<Self::Vector> {
        vsa::bind(a, b)
    }

    fn bundle(&self, vectors: &[&Self::Vector]) -> Result<Self::Vector> {
        vsa::bundle(vectors.iter().copied())
    }

    fn permute(&self, v: &Self::Vector, shift: i64) -> Result<Self::Vector> {
        vsa::permute(v, shift)
    }

    fn dot(&self, a: &Self::Vector, b: &Self::Vector) -> Result<i64> {
        vsa::dot(a, b)
    }

    fn cosine(&self, a: &Self::Vector, b: &Self::Vector) -> Result<f64> {
        vsa::similarity(a, b)
    }

    fn batch_cosine(&self, query: &Self::Vector, rows: &[Self::Vector]) -> Result<Vec<f64>> {
        vsa::batch_similarity(query, rows)
    }

    fn hamming(&self, a: &Self::Vector, b: &Self::Vector) -> Result<usize> {
        vsa::hamming_distance(a, b)
    }
}

/// Two bit-planes per vector; word-parallel bind and popcount metrics.
#[derive(Clone, Copy, Debug)]
pub struct PackedBackend {
    dim: usize,
}

impl PackedBackend {
    /// Backend producing vectors of dimension `dim`.
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Default for PackedBackend {
    fn default() -> Self {
        Self::new(vsa::DIM)
    }
}

impl VsaBackend for PackedBackend {
    type Vector = PackedTritVec;

    fn dim(&self) -> usize {
        self.dim
    }

    fn zero(&self) -> Result<Self::Vector> {
        PackedTritVec::zeros(self.dim)
    }

    fn random(&self, seed: u64) -> Result<Self::Vector> {
        PackedTritVec::pack(&TritVec::random(self.dim, seed)?)
    }

    fn bind(&self, a: &Self::Vector, b: &Self::Vector) -> Result<Self::Vector> {
        a.bind(b)
    }

    fn bundle(&self, vectors: &[&Self::Vector]) -> Result<Self::Vector> {
        let mut acc = PackedBundle::new(vectors.first().map_or(self.dim, |v| v.dim()));
        for v in vectors {
            acc.add(v)?;
        }
        acc.finish()
    }

    fn permute(&self, v: &Self::Vector, shift: i64) -> Result<Self::Vector> {
        v.permute(shift)
    }

    fn dot(&self, a: &Self::Vector, b: &Self::Vector) -> Result<i64> {
        a.dot(b)
    }

    fn cosine(&self, a: &Self::Vector, b: &Self::Vector) -> Result<f64> {
        a.similarity(b)
    }

    fn batch_cosine(&self, query: &Self::Vector, rows: &[Self::Vector]) -> Result<Vec<f64>> {
        query.batch_similarity(rows)
    }

    fn hamming(&self, a: &Self::Vector, b: &Self::Vector) -> Result<usize> {
        a.hamming_distance(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VsaError;

    /// Bind/bundle/unbind round trip written once against the trait.
    fn role_filler_recall<B: VsaBackend>(backend: &B) -> f64 {
        let role = backend.random(101).unwrap();
        let filler = backend.random(202).unwrap();
        let noise = backend.random(303).unwrap();
        let pair = backend.bind(&role, &filler).unwrap();
        let record = backend.bundle(&[&pair, &noise, &pair]).unwrap();
        let recovered = backend.bind(&record, &role).unwrap();
        backend.cosine(&recovered, &filler).unwrap()
    }

    #[test]
    fn test_backends_agree_on_recall() {
        let dense = role_filler_recall(&DenseBackend::new(4096));
        let packed = role_filler_recall(&PackedBackend::new(4096));
        assert_eq!(dense, packed);
        assert!(dense > 0.5, "recall similarity = {dense}");
    }

    #[test]
    fn test_backends_agree_on_metrics() {
        let d = DenseBackend::new(1000);
        let p = PackedBackend::new(1000);
        let (da, db) = (d.random(1).unwrap(), d.random(2).unwrap());
        let (pa, pb) = (p.random(1).unwrap(), p.random(2).unwrap());

        assert_eq!(PackedTritVec::pack(&da).unwrap(), pa);
        assert_eq!(d.dot(&da, &db).unwrap(), p.dot(&pa, &pb).unwrap());
        assert_eq!(d.hamming(&da, &db).unwrap(), p.hamming(&pa, &pb).unwrap());
        assert_eq!(
            d.permute(&da, -17).unwrap(),
            p.permute(&pa, -17).unwrap().unpack().unwrap()
        );
    }

    #[test]
    fn test_backends_agree_on_batch_cosine() {
        let d = DenseBackend::new(777);
        let p = PackedBackend::new(777);
        let dense_rows: Vec<TritVec> = (1..=6)
            .map(|s| d.random(s).unwrap())
            .chain(std::iter::once(d.zero().unwrap()))
            .collect();
        let packed_rows: Vec<PackedTritVec> = (1..=6)
            .map(|s| p.random(s).unwrap())
            .chain(std::iter::once(p.zero().unwrap()))
            .collect();

        let dense = d.batch_cosine(&dense_rows[0], &dense_rows).unwrap();
        let packed = p.batch_cosine(&packed_rows[0], &packed_rows).unwrap();
        assert_eq!(dense, packed);
        assert_eq!(dense[0], 1.0);
        assert_eq!(dense[6], 0.0);
    }

    #[test]
    fn test_empty_bundle_is_error() {
        assert!(matches!(
            DenseBackend::new(8).bundle(&[]),
            Err(VsaError::Empty { .. })
        ));
        assert!(matches!(
            PackedBackend::new(8).bundle(&[]),
            Err(VsaError::Empty { .. })
        ));
    }

    #[test]
    fn test_default_dimension() {
        assert_eq!(DenseBackend::default().dim(), vsa::DIM);
        assert_eq!(PackedBackend::default().zero().unwrap().dim(), vsa::DIM);
    }
}
