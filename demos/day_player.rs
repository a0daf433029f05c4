//! Walk one persona's full day out loud.
//!
//! Run with: cargo run --example day_player --features cpal_sink -- marisol
//!
//! Plays each hour for three seconds through the default output device,
//! printing the journey as it goes.

use std::thread::sleep;
use std::time::{Duration, Instant};

use soundial::{Session, SynthEngine, AUTOPLAY_PERIOD_SECS, PERSONAS};

fn main() {
    tracing_subscriber::fmt::init();

    let id = std::env::args().nth(1).unwrap_or_else(|| "marisol".to_string());

    let engine = match SynthEngine::default_output() {
        Some(engine) => engine,
        None => {
            eprintln!("No audio output devices found!");
            return;
        }
    };
    println!("Output at {} Hz", engine.sample_rate());

    let mut session = Session::with_engine(engine);
    if !session.select_persona(&id) {
        eprintln!("Unknown persona '{}'. Try one of:", id);
        for p in PERSONAS.iter() {
            eprintln!("  {} ({}, {})", p.id, p.role, p.borough);
        }
        return;
    }
    let persona = session.persona().unwrap();
    println!("{} - {} - {}\n", persona.name, persona.role, persona.borough);

    let start = Instant::now();
    session.toggle_autoplay(0.0);

    // Pre-fill so the device never starts on an empty ring.
    for _ in 0..32 {
        session.engine_mut().process_block();
    }

    let total = AUTOPLAY_PERIOD_SECS * 24.0;
    let mut last_hour: u8 = 25;

    while start.elapsed().as_secs_f64() < total {
        let elapsed = start.elapsed().as_secs_f64();
        session.poll(elapsed);

        if session.hour() != last_hour {
            last_hour = session.hour();
            if let Some(view) = session.hour_view() {
                println!(
                    "{:>9}  {} ({:.0} dB)",
                    view.hour_title, view.location, view.decibels
                );
            }
        }

        // Keep generation slightly ahead of the wall clock.
        while session.engine().now() < elapsed + 0.05 {
            session.engine_mut().process_block();
        }
        sleep(Duration::from_micros(500));
    }

    println!("\nDay complete.");
}
