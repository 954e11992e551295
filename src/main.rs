//! Game of Life design scorer CLI - Run design files from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use hexlife::{
    compute::{Simulation, compact_hex},
    schema::{Design, Placement, RunConfig},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Score Game of Life designs from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to run configuration file");
        eprintln!("  generations  Generation target override (default: from config)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let mut config: RunConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Some(generations) = args.get(2) {
        config.generations = generations.parse().unwrap_or_else(|e| {
            eprintln!("Error parsing generation override: {}", e);
            std::process::exit(1);
        });
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    println!("Game of Life Design Fitness");
    println!("===========================");
    println!("Board: {}x{} (dead border)", config.rows, config.columns);
    println!("Generations: {}", config.generations);
    println!("Designs: {}", config.designs.len());

    let mut sim = Simulation::new(config.rows, config.columns).unwrap_or_else(|e| {
        eprintln!("Invalid board: {}", e);
        std::process::exit(1);
    });
    let placement = Placement::centered_box(config.rows, config.columns);

    let start = Instant::now();

    for (i, path) in config.designs.iter().enumerate() {
        let number = i + 1;

        let design = Design::from_path(path).unwrap_or_else(|e| {
            eprintln!("Error loading design {}: {}", path.display(), e);
            std::process::exit(1);
        });

        sim.seed(&design, placement);
        println!();
        println!("Initial compact board:");
        print!("{}", compact_hex(sim.current()));

        let stats = sim.run_to_generation(config.generations);

        println!();
        println!("Final compact board:");
        print!("{}", compact_hex(sim.current()));
        println!();
        println!(
            "  Live cells: {} -> {} over {} generations",
            stats.start_live, stats.end_live, stats.generations
        );
        println!("Fitness of design {}: {}", number, stats.fitness);
    }

    println!();
    println!("Time: {:.2}s", start.elapsed().as_secs_f32());
}

fn print_example_config() {
    let config = RunConfig::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example design file (one line per row, hex digits, 4 cells each):");
    println!("20");
    println!("10");
    println!("70");
}
