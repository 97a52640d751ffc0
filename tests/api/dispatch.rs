use std::ptr;

use figura::Shape;

use crate::draw_to_string;

#[test]
fn same_variant_shares_one_dispatch_table() {
    let small = Shape::rect(1);
    let large = Shape::rect(999);

    assert!(ptr::eq(small.dispatch_table(), large.dispatch_table()));
    assert_eq!(small.dispatch_table().draw_fn(), large.dispatch_table().draw_fn());
    // Identical descriptor, independent data.
    assert_ne!(draw_to_string(&small), draw_to_string(&large));
}

#[test]
fn different_variants_use_different_dispatch_tables() {
    let rect = Shape::rect(10);
    let circle = Shape::circle(10);

    assert!(!ptr::eq(rect.dispatch_table(), circle.dispatch_table()));
    assert_ne!(rect.dispatch_table().draw_fn(), circle.dispatch_table().draw_fn());
}

#[test]
fn each_variant_renders_with_its_own_format() {
    // Same parameter value on both, so only dispatch can tell them apart.
    let rect = draw_to_string(&Shape::rect(7));
    let circle = draw_to_string(&Shape::circle(7));

    assert!(rect.starts_with("Drawing Rect with perimeter:"));
    assert!(circle.starts_with("Drawing Circle with radius:"));
    assert!(!rect.contains("Circle"));
    assert!(!circle.contains("Rect"));
}

#[test]
fn dispatch_table_carries_the_type_name() {
    assert_eq!(Shape::rect(10).type_name(), "Rect");
    assert_eq!(Shape::circle(8).type_name(), "Circle");
    assert_eq!(Shape::rect(10).dispatch_table().type_name, "Rect");
}
