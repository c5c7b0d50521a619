//! Word-level kernels for packed vectors, with compile-time SIMD dispatch.
//!
//! Capability is decided by `target_feature` at build time, not detected at
//! run time: build with `RUSTFLAGS="-C target-cpu=native"` (or an explicit
//! `-C target-feature=+avx2`) to enable the vector paths.
//!
//! # Features
//! - x86_64: AVX-512F (8 words per step) or AVX2 (4 words per step)
//! - Fallback: scalar word loop, which the vector paths also use for their tails

/// Whether this build carries the AVX2 kernels.
#[inline]
pub const fn has_avx2() -> bool {
    cfg!(all(target_arch = "x86_64", target_feature = "avx2"))
}

/// Whether this build carries the AVX-512F kernels.
#[inline]
pub const fn has_avx512() -> bool {
    cfg!(all(target_arch = "x86_64", target_feature = "avx512f"))
}

/// Name of the kernel set compiled in: `"avx512f"`, `"avx2"`, `"neon"` or `"scalar"`.
pub const fn simd_features_string() -> &'static str {
    if has_avx512() {
        "avx512f"
    } else if has_avx2() {
        "avx2"
    } else if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
        "neon"
    } else {
        "scalar"
    }
}

/// Plane pair borrowed from a packed vector.
pub(crate) type Planes<'a> = (&'a [u64], &'a [u64]);

/// Word-parallel bind of two plane pairs into `out`.
///
/// All six slices must have the same length; callers check dimensions first.
#[inline]
pub(crate) fn bind_words(a: Planes<'_>, b: Planes<'_>, out: (&mut [u64], &mut [u64])) {
    debug_assert!(a.0.len() == b.0.len() && a.0.len() == out.0.len());

    // Safety: the avx512f target feature is enabled for this build.
    #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
    unsafe {
        avx512::bind_words(a, b, out);
    }

    // Safety: the avx2 target feature is enabled for this build.
    #[cfg(all(
        target_arch = "x86_64",
        target_feature = "avx2",
        not(target_feature = "avx512f")
    ))]
    unsafe {
        avx2::bind_words(a, b, out);
    }

    #[cfg(not(all(
        target_arch = "x86_64",
        any(target_feature = "avx2", target_feature = "avx512f")
    )))]
    bind_words_scalar(a, b, out, 0);
}

/// Scalar bind over words `start..`.
#[inline]
fn bind_words_scalar(
    (ap, an): Planes<'_>,
    (bp, bn): Planes<'_>,
    (op, on): (&mut [u64], &mut [u64]),
    start: usize,
) {
    for w in start..op.len() {
        op[w] = (ap[w] & bp[w]) | (an[w] & bn[w]);
        on[w] = (ap[w] & bn[w]) | (an[w] & bp[w]);
    }
}

// ============================================================================
// x86_64 AVX2 Implementation
// ============================================================================

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod avx2 {
    use super::{bind_words_scalar, Planes};
    use std::arch::x86_64::*;

    const LANES: usize = 4;

    /// # Safety
    /// Requires AVX2 support.
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn bind_words(a: Planes<'_>, b: Planes<'_>, out: (&mut [u64], &mut [u64])) {
        let (ap, an) = a;
        let (bp, bn) = b;
        let (op, on) = out;
        let full = op.len() / LANES * LANES;

        for offset in (0..full).step_by(LANES) {
            let vap = _mm256_loadu_si256(ap.as_ptr().add(offset) as *const __m256i);
            let van = _mm256_loadu_si256(an.as_ptr().add(offset) as *const __m256i);
            let vbp = _mm256_loadu_si256(bp.as_ptr().add(offset) as *const __m256i);
            let vbn = _mm256_loadu_si256(bn.as_ptr().add(offset) as *const __m256i);

            let pos = _mm256_or_si256(_mm256_and_si256(vap, vbp), _mm256_and_si256(van, vbn));
            let neg = _mm256_or_si256(_mm256_and_si256(vap, vbn), _mm256_and_si256(van, vbp));

            _mm256_storeu_si256(op.as_mut_ptr().add(offset) as *mut __m256i, pos);
            _mm256_storeu_si256(on.as_mut_ptr().add(offset) as *mut __m256i, neg);
        }

        bind_words_scalar((ap, an), (bp, bn), (op, on), full);
    }
}

// ============================================================================
// x86_64 AVX-512 Implementation
// ============================================================================

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
mod avx512 {
    use super::{bind_words_scalar, Planes};
    use std::arch::x86_64::*;

    const LANES: usize = 8;

    /// # Safety
    /// Requires AVX-512F support.
    #[target_feature(enable = "avx512f")]
    pub(super) unsafe fn bind_words(a: Planes<'_>, b: Planes<'_>, out: (&mut [u64], &mut [u64])) {
        let (ap, an) = a;
        let (bp, bn) = b;
        let (op, on) = out;
        let full = op.len() / LANES * LANES;

        for offset in (0..full).step_by(LANES) {
            let vap = _mm512_loadu_si512(ap.as_ptr().add(offset) as *const __m512i);
            let van = _mm512_loadu_si512(an.as_ptr().add(offset) as *const __m512i);
            let vbp = _mm512_loadu_si512(bp.as_ptr().add(offset) as *const __m512i);
            let vbn = _mm512_loadu_si512(bn.as_ptr().add(offset) as *const __m512i);

            let pos = _mm512_or_si512(_mm512_and_si512(vap, vbp), _mm512_and_si512(van, vbn));
            let neg = _mm512_or_si512(_mm512_and_si512(vap, vbn), _mm512_and_si512(van, vbp));

            _mm512_storeu_si512(op.as_mut_ptr().add(offset) as *mut __m512i, pos);
            _mm512_storeu_si512(on.as_mut_ptr().add(offset) as *mut __m512i, neg);
        }

        bind_words_scalar((ap, an), (bp, bn), (op, on), full);
    }
}
