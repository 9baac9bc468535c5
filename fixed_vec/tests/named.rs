use fixed_vec::{FixedVector, NamedFixedVec};
use fixed_vec_derive::NamedFixedVec;

#[derive(Debug, Copy, Clone, PartialEq, NamedFixedVec)]
struct State<T> {
    x: T,
    y: T,
    angle: T,
}

#[derive(Debug, Copy, Clone, PartialEq, NamedFixedVec)]
struct Control<T> {
    v: T,
    w: T,
}

type State64 = State<f64>;

#[test]
fn size_is_field_count() {
    assert_eq!(State64::SIZE, 3);
    assert_eq!(<Control<i32> as NamedFixedVec<i32, 2>>::SIZE, 2);
}

#[test]
fn fields_map_in_declaration_order() {
    let s = State64 {
        x: 1.0,
        y: 2.0,
        angle: 0.5,
    };
    let v = s.to_fixed();
    assert_eq!(v.into_array(), [1.0, 2.0, 0.5]);
    assert_eq!(State64::from_fixed(&v), s);
}

#[test]
fn derived_ops_match_fixed_vector() {
    let a = State::<i32> {
        x: 1,
        y: 2,
        angle: 3,
    };
    let b = State::<i32> {
        x: 10,
        y: -20,
        angle: 30,
    };

    assert_eq!((a + b).to_fixed(), a.to_fixed() + b.to_fixed());
    assert_eq!((b - a).to_fixed(), b.to_fixed() - a.to_fixed());
    assert_eq!((a * 4).to_fixed(), 4 * a.to_fixed());

    let mut c = a;
    c += b;
    c -= a;
    assert_eq!(c, b);
}

#[test]
fn euler_step() {
    let mut s = State64 {
        x: 0.0,
        y: 0.0,
        angle: 0.0,
    };
    let rate = State64 {
        x: 1.0,
        y: -2.0,
        angle: 0.25,
    };
    for _ in 0..4 {
        s += rate * 0.5;
    }
    assert_eq!(s.to_fixed(), FixedVector::from([2.0, -4.0, 0.5]));
}

#[test]
fn dot_and_norm_through_view() {
    let c = Control { v: 3.0, w: -4.0 };
    assert_eq!(c.norm(), 5.0);
    assert_eq!(c.dot(&Control { v: 1.0, w: 1.0 }), -1.0);
}
