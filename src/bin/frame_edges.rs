use frame_edges::config::load_config;
use frame_edges::image::io::{load_packed_frame, save_grayscale_u8, write_json_file};
use frame_edges::FrameEdgeFilter;
use log::info;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let frame = load_packed_frame(&config.input)?;
    info!(
        "Loaded {} ({}x{})",
        config.input.display(),
        frame.width,
        frame.height
    );

    let filter = FrameEdgeFilter::new(config.filter).map_err(|e| e.to_string())?;
    let (edges, report) = filter
        .process_frame_with_report(&frame.pixels, frame.width, frame.height)
        .map_err(|e| e.to_string())?;

    save_grayscale_u8(edges.as_image(), &config.output.edge_map)?;
    println!(
        "Saved edge map to {} ({} edge pixels, {:.3} ms)",
        config.output.edge_map.display(),
        report.edge_pixels,
        report.total_ms
    );

    if let Some(path) = &config.output.summary_json {
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: frame_edges <config.json>".to_string()
}
