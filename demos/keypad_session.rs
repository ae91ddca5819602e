//! Keypad Session
//!
//! This example drives the full calculator variant through a scripted
//! interaction, printing the display and preview surfaces after every
//! key press.
//!
//! Key concepts:
//! - Labeled key presses mapped to typed input events
//! - Display and preview surfaces as the render environment
//! - Divide-by-zero recovery and the keystroke tape
//!
//! Run with: cargo run --example keypad_session

use reckon::render::TextSurface;
use reckon::session::Session;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session Example ===\n");

    let mut session = Session::new();
    let mut surface = TextSurface::new();

    let keys = [
        "5", "+", "3", "=", // 5 + 3 = 8
        "×", "2", "=", // chain the result: 8 × 2 = 16
        "%", // 16 % = 0.16
        "7", "÷", "0", "=", // divide by zero
        "4", "2", // fresh entry after the error
    ];

    for key in keys {
        session.press(key, &mut surface);
        println!(
            "[{key:>2}]  display: {:<24} preview: {}",
            surface.result(),
            surface.preview()
        );
    }

    println!("\nSession phase: {}", session.phase().name());
    println!("Events journaled: {}", session.tape().len());
}
