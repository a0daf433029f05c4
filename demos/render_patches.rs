//! Render every category's patch to a WAV file and print shape stats.
//!
//! Run with: cargo run --example render_patches -- out_dir
//!
//! Needs no audio device; everything goes through the offline engine.

use soundial::{render_category, write_wav, RenderConfig, RenderStats, SoundCategory};

fn main() {
    tracing_subscriber::fmt::init();

    let out_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "patches".to_string());
    std::fs::create_dir_all(&out_dir).expect("create output directory");

    let config = RenderConfig::default();
    println!(
        "{} Hz, {:.1} s each, at {:.0} dB\n",
        config.sample_rate, config.duration_secs, config.decibels
    );

    for category in SoundCategory::ALL.iter() {
        let samples = render_category(*category, &config);
        let stats = RenderStats::measure(&samples);
        let path = format!("{}/{}.wav", out_dir, category.label());
        write_wav(&path, &samples, config.sample_rate).expect("write wav");
        println!(
            "{:<10} peak {:.3}  rms {:.3}  zero crossings {:>6}  -> {}",
            category.label(),
            stats.peak,
            stats.rms,
            stats.zero_crossings,
            path
        );
    }
}
