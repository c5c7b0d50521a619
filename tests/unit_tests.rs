//! Unit tests for Vector Symbolic Architecture (VSA)

use hypertrit::{
    analogy, bind, bind_in_place, bind_many, bundle, dot, hamming_distance, permute, sequence,
    similarity, unbind, Trit, TritVec, TritView, TritViewMut, Trits, TritsMut, VsaError,
};

fn tv(values: &[i8]) -> TritVec {
    TritVec::from_values(values).unwrap()
}

#[test]
fn test_concrete_dim4_scenario() {
    let a = tv(&[1, -1, 0, 1]);
    let b = tv(&[1, 1, -1, 0]);

    assert_eq!(bind(&a, &b).unwrap().to_i8_vec(), vec![1, -1, 0, 0]);
    assert_eq!(dot(&a, &b).unwrap(), 0);
    assert_eq!(hamming_distance(&a, &b).unwrap(), 3);
}

#[test]
fn test_dimension_mismatch_scenario() {
    let a = TritVec::zeros(4).unwrap();
    let b = TritVec::zeros(5).unwrap();

    let err = bind(&a, &b).unwrap_err();
    assert!(matches!(
        err,
        VsaError::DimensionMismatch {
            expected: 4,
            actual: 5
        }
    ));
    assert_eq!(err.to_string(), "dimension mismatch: expected 4, got 5");

    assert!(dot(&a, &b).is_err());
    assert!(hamming_distance(&a, &b).is_err());
    assert!(similarity(&a, &b).is_err());
    assert!(bundle([&a, &b]).is_err());

    let mut out = TritVec::zeros(4).unwrap();
    assert!(bind_in_place(&mut out, &a, &b).is_err());
}

#[test]
fn test_random_is_deterministic_per_seed() {
    let a = TritVec::random(1000, 42).unwrap();
    let b = TritVec::random(1000, 42).unwrap();
    let c = TritVec::random(1000, 43).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.dim(), 1000);

    // Roughly a third of each value.
    let nnz = a.nnz();
    assert!((550..=780).contains(&nnz), "nnz = {nnz}");
}

#[test]
fn test_from_values_clamps() {
    let v = TritVec::from_values(&[5i32, -7, 0, 1]).unwrap();
    assert_eq!(v.to_i8_vec(), vec![1, -1, 0, 1]);
}

#[test]
fn test_record_role_filler_recovery() {
    let dim = 10_000;
    let name = TritVec::from_symbol("name", dim).unwrap();
    let age = TritVec::from_symbol("age", dim).unwrap();
    let alice = TritVec::from_symbol("alice", dim).unwrap();
    let thirty = TritVec::from_symbol("thirty", dim).unwrap();

    let record = bundle([
        &bind(&name, &alice).unwrap(),
        &bind(&age, &thirty).unwrap(),
        &bind(&name, &alice).unwrap(),
    ])
    .unwrap();

    let who = unbind(&record, &name).unwrap();
    let to_alice = similarity(&who, &alice).unwrap();
    let to_thirty = similarity(&who, &thirty).unwrap();
    assert!(to_alice > 0.5, "to_alice = {to_alice}");
    assert!(to_thirty.abs() < 0.1, "to_thirty = {to_thirty}");
}

#[test]
fn test_bind_in_place_over_views() {
    let mut raw_a = [1i8, -1, 0, 1];
    let raw_b = [-1i8, -1, 1, 1];
    let a = TritView::from_i8(&raw_a).unwrap().to_owned_vec().unwrap();
    let b = TritView::from_i8(&raw_b).unwrap();

    let mut out = TritViewMut::from_i8_mut(&mut raw_a).unwrap();
    bind_in_place(&mut out, &a, &b).unwrap();
    assert_eq!(out.to_i8_vec(), vec![-1, 1, 0, 1]);
    drop(out);
    assert_eq!(raw_a, [-1, 1, 0, 1]);
}

#[test]
fn test_view_rejects_out_of_domain_bytes() {
    let raw = [0i8, 1, 2];
    assert!(matches!(
        TritView::from_i8(&raw),
        Err(VsaError::InvalidTrit { index: 2, value: 2 })
    ));
}

#[test]
fn test_mutable_view_negate_and_set() {
    let mut raw = [1i8, 0, -1];
    {
        let mut view = TritViewMut::from_i8_mut(&mut raw).unwrap();
        view.negate_in_place();
        view.set(1, Trit::P).unwrap();
        assert!(view.set(3, Trit::P).is_err());
    }
    assert_eq!(raw, [-1, 1, 1]);
}

#[test]
fn test_bind_many_and_analogy() {
    let a = TritVec::random(512, 1).unwrap();
    let b = TritVec::random(512, 2).unwrap();
    let c = TritVec::random(512, 3).unwrap();

    let folded = bind_many([&a, &b, &c]).unwrap();
    assert_eq!(folded, bind(&bind(&a, &b).unwrap(), &c).unwrap());
    assert_eq!(analogy(&a, &b, &c).unwrap(), folded);
    assert!(matches!(
        bind_many(std::iter::empty::<&TritVec>()),
        Err(VsaError::Empty { op: "bind" })
    ));
}

#[test]
fn test_analogy_transfers_relation() {
    // With fully dense keys the mapping a -> b applied to a yields b exactly.
    let a: TritVec = (0..256).map(|i| if i % 3 == 0 { Trit::N } else { Trit::P }).collect();
    let b = TritVec::random(256, 9).unwrap();
    assert_eq!(analogy(&a, &b, &a).unwrap(), b);
}

#[test]
fn test_sequence_is_order_sensitive() {
    let x = TritVec::from_symbol("x", 2048).unwrap();
    let y = TritVec::from_symbol("y", 2048).unwrap();
    let xy = sequence([&x, &y]).unwrap();
    let yx = sequence([&y, &x]).unwrap();
    assert_ne!(xy, yx);

    // The first element is stored unrotated, the second shifted by one.
    assert!(similarity(&xy, &x).unwrap() > 0.3);
    assert!(similarity(&xy, &permute(&y, 1).unwrap()).unwrap() > 0.3);
}

#[test]
fn test_permute_wraps() {
    let v = tv(&[1, 0, -1, 0, 0]);
    assert_eq!(permute(&v, 2).unwrap().to_i8_vec(), vec![0, 0, 1, 0, -1]);
    assert_eq!(permute(&v, 7).unwrap(), permute(&v, 2).unwrap());
    assert_eq!(permute(&v, -3).unwrap(), permute(&v, 2).unwrap());
    assert_eq!(permute(&v, 0).unwrap(), v);
}

#[test]
fn test_display_and_accessors() {
    let mut v = tv(&[1, -1, 0]);
    assert_eq!(v.to_string(), "+-0");
    assert_eq!(v[1], Trit::N);
    v[2] = Trit::P;
    assert_eq!(v.get(2), Some(Trit::P));
    assert_eq!(v.get(3), None);
    assert_eq!(v.memory_bytes(), 3);
    assert_eq!(v.negated().unwrap().to_i8_vec(), vec![-1, 1, -1]);
}
