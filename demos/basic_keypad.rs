//! Basic Keypad
//!
//! This example drives the reduced calculator variant: a display surface
//! only, with no preview and no percent key.
//!
//! Run with: cargo run --example basic_keypad

use reckon::render::Surface;
use reckon::session::Session;

/// A host with a single output area, like the simpler widget ships with.
#[derive(Default)]
struct DisplayOnly {
    text: String,
}

impl Surface for DisplayOnly {
    fn show_result(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

fn main() {
    println!("=== Basic Keypad Example ===\n");

    let mut session = Session::basic();
    let mut surface = DisplayOnly::default();

    for key in ["1", "2", "+", "6", "=", "%", "⌫"] {
        session.press(key, &mut surface);
        println!("[{key:>2}]  display: {}", surface.text);
    }

    // Percent is inert here and equals locked the entry, so backspace
    // changed nothing: the display still shows the sum.
    println!("\nFinal display: {}", surface.text);
}
