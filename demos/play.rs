//! Example: play Hunters and Rabbits from the command line
//!
//! Loads a board, flips the given vertices on the first turn, plays the
//! requested number of turns and optionally saves the result.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example play -- board.xml --flip 2,3 --turns 4 out.xml
//! ```

use std::env;

use hunters_rabbits::io::{get_graph_info, validate_document};
use hunters_rabbits::prelude::*;

fn print_board(session: &Session) {
    let line: Vec<String> = session
        .graph()
        .vertices()
        .map(|v| format!("{}:{}", v.id, if v.color.is_black() { 'B' } else { 'W' }))
        .collect();
    println!("  [{}] {}", session.turn(), line.join(" "));
}

fn main() -> BoardResult<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <board.xml> [output.xml] [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --flip a,b,c    Vertices to flip on the first turn");
        eprintln!("  --turns N       Number of turns to play (default 1)");
        eprintln!("  --info          Show board info only, don't play");
        eprintln!("  --validate      Validate the document only, don't play");
        std::process::exit(1);
    }

    let input_path = &args[1];

    // Parse options
    let info_only = args.contains(&"--info".to_string());
    let validate_only = args.contains(&"--validate".to_string());
    let option_value = |name: &str| {
        args.iter()
            .position(|a| a == name)
            .and_then(|i| args.get(i + 1))
    };
    let flips: Vec<&str> = option_value("--flip")
        .map(|s| s.split(',').filter(|id| !id.is_empty()).collect())
        .unwrap_or_default();
    let turns: usize = match option_value("--turns").map(|s| s.parse()) {
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            eprintln!("Error: --turns expects a number");
            std::process::exit(1);
        }
        None => 1,
    };

    // Info only mode
    if info_only {
        let info = get_graph_info(input_path)?;
        println!("Board Information:");
        println!("  Vertices: {}", info.vertex_count);
        println!("  Edges: {}", info.edge_count);
        println!("  Black: {}", info.black_count);
        println!("  White: {}", info.white_count);
        println!("  Self-loops: {}", info.self_loops);
        println!("  Isolated: {}", info.isolated);
        return Ok(());
    }

    // Validate only mode
    if validate_only {
        let text = std::fs::read_to_string(input_path).map_err(|source| BoardError::Io {
            path: input_path.into(),
            source,
        })?;
        let result = validate_document(&text);

        if result.is_valid {
            println!("Board is valid");
        } else {
            println!("Board has errors:");
            for err in &result.errors {
                println!("  - {}", err);
            }
        }

        if !result.warnings.is_empty() {
            println!("Warnings:");
            for warn in &result.warnings {
                println!("  - {}", warn);
            }
        }

        return Ok(());
    }

    let mut session = Session::load(input_path)?;
    println!("Playing {} turns on {}", turns, input_path);
    print_board(&session);

    for id in &flips {
        session.toggle(id)?;
    }

    for _ in 0..turns {
        let summary = session.end_turn();
        print_board(&session);
        log::debug!("{:?}", summary);
    }

    // Output path is the first positional argument after the input
    let output_path = args[2..]
        .iter()
        .enumerate()
        .find(|(i, a)| {
            !a.starts_with("--") && !matches!(args[i + 1].as_str(), "--flip" | "--turns")
        })
        .map(|(_, a)| a);

    if let Some(output_path) = output_path {
        session.save(output_path)?;
        println!();
        println!("Saved to {}", output_path);
    }

    Ok(())
}
