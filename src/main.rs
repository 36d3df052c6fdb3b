//! Miss-count runner for the registered transpose strategies.

use transpose::harness::{evaluate, Evaluation, HarnessConfig, Shape, DEFAULT_LOG_LEVEL};
use transpose::registry::{Registry, BASELINE_NAME};

fn main() -> transpose::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_target(false)
        .init();

    let config = HarnessConfig::from_env()?;
    let registry = Registry::standard();

    println!("=== Matrix Transpose Cache Simulation ===\n");
    println!("Cache: 1 KiB, 32-byte lines, direct-mapped\n");

    let results = evaluate(&registry, &config)?;

    for &shape in &config.shapes {
        let rows: Vec<&Evaluation> = results.iter().filter(|e| e.shape == shape).collect();
        let baseline = baseline_misses(&rows);

        println!("Matrix: {} (M×N)", shape);
        println!("{}", "-".repeat(70));
        for (i, e) in rows.iter().enumerate() {
            println!(
                "{}. {:32} {:6} misses  {:6} hits  {:6} evictions  ({:.1}×){}",
                i + 1,
                e.strategy,
                e.stats.misses,
                e.stats.hits,
                e.stats.evictions,
                ratio(baseline, e.stats.misses),
                if e.correct { "" } else { "  INCORRECT" }
            );
        }
        println!();
    }

    print_summary_table(&registry, &config.shapes, &results);
    Ok(())
}

fn baseline_misses(rows: &[&Evaluation]) -> u64 {
    rows.iter()
        .find(|e| e.strategy == BASELINE_NAME)
        .map(|e| e.stats.misses)
        .unwrap_or(0)
}

fn ratio(baseline: u64, misses: u64) -> f64 {
    if misses == 0 {
        return 0.0;
    }
    baseline as f64 / misses as f64
}

fn print_summary_table(registry: &Registry, shapes: &[Shape], results: &[Evaluation]) {
    let width = 34 + 12 * shapes.len();
    println!("\n{}", "=".repeat(width));
    println!("SUMMARY (misses)");
    println!("{}", "=".repeat(width));

    print!("\n{:<32}", "Method");
    for shape in shapes {
        print!(" {:>11}", shape.to_string());
    }
    println!();
    println!("{}", "-".repeat(width));

    for strategy in registry {
        print!("{:<32}", strategy.name());
        for &shape in shapes {
            let cell = results
                .iter()
                .find(|e| e.shape == shape && e.strategy == strategy.name())
                .map(|e| {
                    if e.correct {
                        e.stats.misses.to_string()
                    } else {
                        "wrong".to_string()
                    }
                })
                .unwrap_or_else(|| "-".to_string());
            print!(" {:>11}", cell);
        }
        println!();
    }

    println!("{}", "=".repeat(width));
    println!("\nRatios are relative to \"{}\". Lower miss counts are better.\n", BASELINE_NAME);
}
