//! # Static Ring Demo
//!
//! Keeps a sliding window of simulated temperature samples, shows the
//! overflow reporting, then drains the same stream in both read orders.
//!
//! Run with: `cargo run --example demo`

use anyhow::{Context, Result};

use static_ring::{BufferConfig, PushStatus, RingBuffer};

/// Slots reserved for the sample window
const WINDOW: usize = 8;

fn main() -> Result<()> {
    // Initialize logging so we can see what's happening
    static_ring::init_logging();

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║           Static Ring Demo                                 ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║ Pushes 12 samples into an 8-slot window, then drains it.   ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    let mut window: RingBuffer<i32, WINDOW> =
        RingBuffer::new().context("failed to create sample window")?;

    println!("📈 Recording samples...");
    for tick in 0..12 {
        let sample = simulated_sample(tick);

        match window.push(sample)? {
            PushStatus::Stored => println!("   tick {:>2}: stored {}", tick, sample),
            PushStatus::Overflow { evicted } => {
                println!("   tick {:>2}: stored {} (dropped {})", tick, sample, evicted)
            }
        }
    }

    println!();
    println!(
        "   Window: {:?} ({:.0}% full)",
        window.snapshot()?,
        window.fill_ratio()? * 100.0
    );
    println!("   Latest sample: {}", window.peek()?);
    println!();

    // Same stream through a 4-slot queue
    let config = BufferConfig::queue().with_capacity(4);
    let mut queue: RingBuffer<i32, WINDOW> =
        RingBuffer::with_config(&config).context("failed to create queue")?;
    for tick in 0..12 {
        let _ = queue.push(simulated_sample(tick))?;
    }

    println!("📤 Draining newest first:");
    while let Ok(sample) = window.pop() {
        print!(" {}", sample);
    }
    println!();

    println!("📤 Draining oldest first (4-slot queue):");
    while let Ok(sample) = queue.pop() {
        print!(" {}", sample);
    }
    println!();

    window.deinit()?;
    queue.deinit()?;

    println!();
    println!("✅ Done");
    Ok(())
}

/// Deterministic fake temperature in tenths of a degree.
fn simulated_sample(tick: i32) -> i32 {
    215 + (tick * 7) % 13 - 6
}
