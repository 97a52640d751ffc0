use figura::Shape;
use proptest::prelude::*;

use crate::draw_to_string;

#[test]
fn rect_renders_its_perimeter() {
    assert_eq!(draw_to_string(&Shape::rect(10)), "Drawing Rect with perimeter: 10\n");
}

#[test]
fn circle_renders_its_radius() {
    assert_eq!(draw_to_string(&Shape::circle(8)), "Drawing Circle with radius: 8\n");
}

#[test]
fn zero_and_negative_values_pass_through_unvalidated() {
    assert_eq!(draw_to_string(&Shape::rect(0)), "Drawing Rect with perimeter: 0\n");
    assert_eq!(draw_to_string(&Shape::circle(0)), "Drawing Circle with radius: 0\n");
    assert_eq!(draw_to_string(&Shape::rect(-1)), "Drawing Rect with perimeter: -1\n");
    assert_eq!(draw_to_string(&Shape::circle(-273)), "Drawing Circle with radius: -273\n");
}

#[test]
fn demo_scenario_draws_both_lines_in_order() {
    let shapes = [Shape::rect(10), Shape::circle(8)];

    let mut out = Vec::new();
    for shape in &shapes {
        shape.draw(&mut out).expect("drawing into a Vec cannot fail");
    }

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Drawing Rect with perimeter: 10\nDrawing Circle with radius: 8\n",
    );
}

proptest! {
    #[test]
    fn any_perimeter_renders_exactly(perimeter: i32) {
        prop_assert_eq!(
            draw_to_string(&Shape::rect(perimeter)),
            format!("Drawing Rect with perimeter: {perimeter}\n"),
        );
    }

    #[test]
    fn any_radius_renders_exactly(radius: i32) {
        prop_assert_eq!(
            draw_to_string(&Shape::circle(radius)),
            format!("Drawing Circle with radius: {radius}\n"),
        );
    }
}
