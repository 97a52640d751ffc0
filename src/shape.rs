//! The base shape abstraction and its two variants.

use std::{fmt, io};

use crate::{dispatch_table::DispatchTable, Error};

/// The kind of a [`Shape`].
///
/// This is the closed set of variants the crate knows about. The tag is what
/// makes narrowing safe: [`Shape::as_rect`] and friends inspect it instead of
/// reinterpreting memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A rectangle, described by its perimeter.
    Rect,
    /// A circle, described by its radius.
    Circle,
}

impl ShapeKind {
    /// Returns the display name of the kind, as used in rendered output and
    /// error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Rect => "Rect",
            Self::Circle => "Circle",
        }
    }
}

/// A rectangle, described by its perimeter alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// The rectangle's perimeter. Not validated; zero and negative values
    /// render like any other.
    pub perimeter: i32,
}

/// A circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    /// The circle's radius. Not validated.
    pub radius: i32,
}

/// Variant storage for [`Shape`].
enum ShapeData {
    Rect(Rect),
    Circle(Circle),
}

/// The base shape abstraction.
///
/// A `Shape` is what every caller holds, no matter which variant was
/// constructed. The base part of the representation is a reference to the
/// variant's canonical [`DispatchTable`]; the variant's own data follows it.
/// The table and the data are installed together by the constructors and
/// never change afterwards, so the two cannot disagree.
///
/// Widening a concrete variant into a `Shape` is always safe and done with
/// the [`From`] impls; narrowing back down goes through the checked
/// [`as_rect`][Shape::as_rect] and [`as_circle`][Shape::as_circle] accessors.
pub struct Shape {
    dtable: &'static DispatchTable,
    data: ShapeData,
}

static RECT_DTABLE: DispatchTable = DispatchTable::new("Rect", draw_rect);
static CIRCLE_DTABLE: DispatchTable = DispatchTable::new("Circle", draw_circle);

impl Shape {
    /// Constructs a rectangle with the given perimeter.
    ///
    /// The instance is allocated on the heap with the rectangle's canonical
    /// dispatch table installed, and handed to the caller as the base-typed
    /// owner. Dropping the box reclaims it.
    pub fn rect(perimeter: i32) -> Box<Shape> {
        Box::new(Shape::from(Rect { perimeter }))
    }

    /// Constructs a circle with the given radius. See [`Shape::rect`].
    pub fn circle(radius: i32) -> Box<Shape> {
        Box::new(Shape::from(Circle { radius }))
    }

    /// Renders the shape into `out`.
    ///
    /// This is the uniform call site: it looks up the render function in the
    /// dispatch table stored in the instance and invokes it with the same
    /// shape reference. Exactly the function registered for the variant that
    /// was originally constructed runs, regardless of what the caller knows
    /// about the shape.
    pub fn draw(&self, out: &mut dyn io::Write) -> Result<(), Error> {
        (self.dtable.draw_fn())(self, out)
    }

    /// Returns the kind of the shape.
    pub fn kind(&self) -> ShapeKind {
        match &self.data {
            ShapeData::Rect(_) => ShapeKind::Rect,
            ShapeData::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Returns the shape's display name, read off its dispatch table.
    pub fn type_name(&self) -> &'static str {
        self.dtable.type_name
    }

    /// Returns the canonical dispatch table installed in this instance.
    ///
    /// All instances of one variant share a single table, so `std::ptr::eq`
    /// on two results tells whether the shapes dispatch identically.
    pub fn dispatch_table(&self) -> &'static DispatchTable {
        self.dtable
    }

    /// Narrows the shape to a rectangle.
    ///
    /// This is the downcast of the exercise, with the traditionally
    /// unchecked precondition replaced by an explicit failure path:
    /// narrowing anything other than a rectangle returns
    /// [`Error::TypeMismatch`] instead of misreading memory.
    pub fn as_rect(&self) -> Result<&Rect, Error> {
        match &self.data {
            ShapeData::Rect(rect) => Ok(rect),
            _ => Err(self.type_mismatch(ShapeKind::Rect)),
        }
    }

    /// Narrows the shape to a circle. See [`Shape::as_rect`].
    pub fn as_circle(&self) -> Result<&Circle, Error> {
        match &self.data {
            ShapeData::Circle(circle) => Ok(circle),
            _ => Err(self.type_mismatch(ShapeKind::Circle)),
        }
    }

    fn type_mismatch(&self, expected: ShapeKind) -> Error {
        Error::TypeMismatch { expected: expected.type_name(), got: self.type_name() }
    }
}

impl From<Rect> for Shape {
    /// Widens a rectangle into the base abstraction, installing the
    /// rectangle's canonical dispatch table.
    fn from(rect: Rect) -> Self {
        Self { dtable: &RECT_DTABLE, data: ShapeData::Rect(rect) }
    }
}

impl From<Circle> for Shape {
    /// Widens a circle into the base abstraction, installing the circle's
    /// canonical dispatch table.
    fn from(circle: Circle) -> Self {
        Self { dtable: &CIRCLE_DTABLE, data: ShapeData::Circle(circle) }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<[{}]>", self.dtable.type_name)
    }
}

/// Renders a rectangle. This is the function registered in the rectangle's
/// dispatch table.
///
/// Narrowing is checked: passing a shape that is not a rectangle returns
/// [`Error::TypeMismatch`] and writes nothing.
pub fn draw_rect(shape: &Shape, out: &mut dyn io::Write) -> Result<(), Error> {
    let rect = shape.as_rect()?;
    writeln!(out, "Drawing Rect with perimeter: {}", rect.perimeter)?;
    Ok(())
}

/// Renders a circle. This is the function registered in the circle's
/// dispatch table. See [`draw_rect`].
pub fn draw_circle(shape: &Shape, out: &mut dyn io::Write) -> Result<(), Error> {
    let circle = shape.as_circle()?;
    writeln!(out, "Drawing Circle with radius: {}", circle.radius)?;
    Ok(())
}
