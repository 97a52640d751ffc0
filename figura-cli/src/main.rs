use std::io;

use clap::Parser;
use figura::Shape;

/// Draws one rectangle and one circle through hand-rolled dispatch tables.
#[derive(Parser)]
#[command(name = "figura")]
struct Options {
    /// Perimeter of the demonstration rectangle.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    perimeter: i32,

    /// Radius of the demonstration circle.
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    radius: i32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();

    let shapes = [Shape::rect(options.perimeter), Shape::circle(options.radius)];

    let mut stdout = io::stdout().lock();
    for shape in &shapes {
        // The same call on both shapes; each instance's table decides what runs.
        shape.draw(&mut stdout)?;
    }

    Ok(())
}
