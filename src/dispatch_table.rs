//! The dispatch table, the record a shape's draw call is routed through.

use std::io;

use crate::{shape::Shape, Error};

/// The type of a render function stored in a [`DispatchTable`].
///
/// The function receives the shape being drawn, typed as the base
/// abstraction rather than as any concrete variant, together with the sink
/// the rendered line is written into. It is polymorphic in that first
/// parameter only; everything else about the call is fixed at compile time.
pub type DrawFn = fn(&Shape, &mut dyn io::Write) -> Result<(), Error>;

/// A dispatch table containing the functions a shape variant supports.
///
/// This is the vtable of the exercise: a record of function pointers (here
/// just one, the renderer) that every invocation of [`Shape::draw`] consults
/// at runtime. Each variant has exactly one canonical table, created at
/// compile time, and every instance of the variant references that same
/// table. The call site stays identical for all shapes; only the table an
/// instance carries decides which function ends up running.
#[derive(Debug)]
pub struct DispatchTable {
    /// The display name of the variant this dispatch table belongs to, as it
    /// appears in rendered output and error messages.
    pub type_name: &'static str,
    /// The render function registered for the variant.
    draw: DrawFn,
}

impl DispatchTable {
    /// Creates a dispatch table for the variant with the given name.
    ///
    /// Tables are only ever created by the crate itself. The set of variants
    /// is closed, so a shape can never end up carrying a table that
    /// disagrees with its data.
    pub(crate) const fn new(type_name: &'static str, draw: DrawFn) -> Self {
        Self { type_name, draw }
    }

    /// Returns the render function registered in this table.
    pub fn draw_fn(&self) -> DrawFn {
        self.draw
    }
}
