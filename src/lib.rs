//! Figura is a tiny, safe rendition of the classic hand-rolled vtable
//! exercise: runtime polymorphism over a fixed set of shapes, built out of a
//! table of function pointers instead of any language-level dispatch.
//!
//! Languages without built-in dynamic dispatch emulate it by storing such a
//! table (a *vtable*) in every object. Constructors install the table that
//! belongs to the object's concrete type, and every call site reads the
//! table back out of the instance to pick the function to run. The call site
//! is written once against the base abstraction, yet behaves differently per
//! instance; that lookup is the entire mechanism, and this crate keeps it
//! explicit so it can be seen and poked at.
//!
//! Two things about the classic C form of the trick do not survive the trip
//! to Rust, on purpose:
//!
//! - Narrowing a base reference back to its concrete type is a checked
//!   operation here ([`Shape::as_rect`], [`Shape::as_circle`]) with an
//!   [`Error::TypeMismatch`] failure path, not a cast that trusts the caller.
//! - Instances have a single owner ([`Shape::rect`] and [`Shape::circle`]
//!   return a [`Box`]) and are reclaimed when that owner drops them, rather
//!   than never.
//!
//! When writing real programs, reach for Rust's own dispatch instead: trait
//! objects build and consult these tables for you, and a plain `enum` with a
//! `match` does the job for a closed set like this one. The point of this
//! crate is to show the machinery those features hide.
//!
//! # Examples
//! ```
//! use figura::Shape;
//!
//! let shapes = [Shape::rect(10), Shape::circle(8)];
//!
//! let mut out = Vec::new();
//! for shape in &shapes {
//!     // One call site; the table stored in each instance picks the renderer.
//!     shape.draw(&mut out)?;
//! }
//! assert_eq!(
//!     String::from_utf8(out)?,
//!     "Drawing Rect with perimeter: 10\nDrawing Circle with radius: 8\n",
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod dispatch_table;
mod error;
mod shape;

pub use dispatch_table::*;
pub use error::*;
pub use shape::*;
