//! Headless sandfall run: pour sand onto a cobble shelf and print the result.

use std::fs;
use std::process;

use sandfall::cell::Material;
use sandfall::{SimulationConfig, Universe};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [config.json] [frames]", args[0]);
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Simulation configuration (default: built-in, 160x96 px, 4 px cells)");
        eprintln!("  frames       Animation frames to run (default: 150)");
        return;
    }

    let config = match args.get(1) {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {e}");
                process::exit(1);
            });
            SimulationConfig::from_json(&json).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {e}");
                process::exit(1);
            })
        }
        None => SimulationConfig {
            width: 160,
            height: 96,
            ..SimulationConfig::default()
        },
    };
    let frames: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(150);

    let mut universe = Universe::with_config(&config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e}");
        process::exit(1);
    });

    let cols = universe.cols() as i32;
    let rows = universe.rows() as i32;
    log::info!("running {frames} frames on a {cols}x{rows} grid");

    // Cobble shelf across the middle third, two thirds of the way down.
    let shelf_y = rows * 2 / 3;
    for x in cols / 3..cols * 2 / 3 {
        universe.set_cell(x, shelf_y, Material::Cobble as u8);
    }

    // Hold the brush near the top and sweep it across the shelf.
    universe.set_material(Material::Sand as u8);
    let px = config.pixel_size as f64;
    let spout = |x: i32| (f64::from(x) * px + px / 2.0, px * 2.5);
    let (sx, sy) = spout(cols / 3);
    universe.pointer_down(sx, sy, 0.0, 0.0);
    for frame in 0..frames {
        if frame == frames / 2 {
            let (ex, ey) = spout(cols * 2 / 3);
            universe.pointer_move(ex, ey, 0.0, 0.0);
        }
        if frame < frames * 3 / 4 {
            universe.hold();
        } else if universe.is_drawing() {
            universe.pointer_up();
        }
        universe.frame();
    }

    let grid = universe.grid();
    for y in 0..rows {
        let row: String = (0..cols)
            .map(|x| match grid.get(x, y).and_then(|c| c.material()) {
                None => '.',
                Some(Material::Sand) => 's',
                Some(Material::Cobble) => '#',
            })
            .collect();
        println!("{row}");
    }
    println!("{} particles after {} passes", grid.occupied_count(), grid.generation());
}
