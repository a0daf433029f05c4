//! Render a persona's dial to a standalone SVG file.
//!
//! Run with: cargo run --example clock_svg -- marisol 8 dial.svg

use soundial::{persona, scene_to_svg, ClockLayout, ClockScene, PERSONAS};

fn main() {
    let mut args = std::env::args().skip(1);
    let id = args.next().unwrap_or_else(|| "marisol".to_string());
    let hour: u8 = args.next().and_then(|h| h.parse().ok()).unwrap_or(8);
    let out = args.next().unwrap_or_else(|| "dial.svg".to_string());

    let p = match persona(&id) {
        Some(p) => p,
        None => {
            eprintln!("Unknown persona '{}'. Known ids:", id);
            for p in PERSONAS.iter() {
                eprintln!("  {}", p.id);
            }
            return;
        }
    };

    let scene = ClockScene::build(Some(p), hour % 24, &ClockLayout::default());
    std::fs::write(&out, scene_to_svg(&scene)).expect("write svg");
    println!("{} at hour {} -> {}", p.name, hour % 24, out);
}
