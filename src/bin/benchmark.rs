//! Time full renders of every rule at several canvas sizes

use std::time::Instant;

use elementary_automata::{RecordingSurface, RuleTable, all_rules, logging, render};
use rayon::prelude::*;

const CELL_SIZE: u32 = 4;

struct Sample {
    name: &'static str,
    ms: f64,
    fills: usize,
}

fn benchmark_rule(name: &'static str, rule: &RuleTable, size: u32, iterations: u32) -> Sample {
    let mut fills = 0;
    let start = Instant::now();
    for _ in 0..iterations {
        let mut surface = RecordingSurface::new(size, size);
        render(rule, size, size, CELL_SIZE, &mut surface);
        fills = surface.fill_count();
    }
    Sample {
        name,
        ms: start.elapsed().as_secs_f64() * 1000.0 / iterations as f64,
        fills,
    }
}

fn main() {
    logging::init();

    println!("=== Elementary Automaton Render Benchmark ===\n");

    let sizes = [256, 512, 1024, 2048, 4096];
    let iterations = 10;
    let rules = all_rules();

    println!("{:>10} {:>10} {:>12} {:>12}", "Canvas", "Rule", "ms/render", "Fill calls");
    println!("{:-<48}", "");

    for size in sizes {
        // Each rule renders onto its own surface, so they can run side by side
        let samples: Vec<Sample> = rules
            .par_iter()
            .map(|(name, rule)| benchmark_rule(*name, rule, size, iterations))
            .collect();

        for sample in samples {
            println!(
                "{:>10} {:>10} {:>12.2} {:>12}",
                format!("{size}x{size}"),
                sample.name,
                sample.ms,
                sample.fills
            );
        }
    }
}
