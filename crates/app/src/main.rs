//! Circle-overlay map demo.
//!
//! Drives the map core over the in-memory widget backend: initializes the
//! controller, delivers the load event, then reads `LON LAT` pairs from
//! stdin (the interactive "form") and replaces the circle overlay after
//! each one. `json` dumps the current source geometry as GeoJSON.

use std::io::{self, BufRead, Write};

use circlemap_core::{MapConfig, MapController, CIRCLE_SOURCE_ID, DEFAULT_CENTER};
use circlemap_geo::Coordinate;
use circlemap_widget::{MapWidget, MemoryWidget, WidgetEvent};
use tracing::warn;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = MapConfig::default();

    match std::env::var("MAP_ACCESS_TOKEN") {
        Ok(token) => config = config.with_access_token(token),
        Err(_) => warn!("MAP_ACCESS_TOKEN not set; the in-memory backend does not need one"),
    }

    let mut controller = MapController::initialize(MemoryWidget::new(), config)?;

    // Request the default overlay before the load completes; the
    // controller flushes it on the ready transition.
    controller.update_overlay(DEFAULT_CENTER)?;
    controller.handle_event(WidgetEvent::Loaded);
    print_overlay(&controller);

    println!("enter `LON LAT` to move the circle, `json` to dump GeoJSON, `quit` to exit");
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        match input {
            "" => {}
            "quit" | "exit" => break,
            "json" => print_geojson(&controller),
            _ => match parse_center(input) {
                Some(center) => match controller.update_overlay(center) {
                    Ok(()) => print_overlay(&controller),
                    Err(e) => eprintln!("{e}"),
                },
                None => eprintln!("expected two numbers: LON LAT"),
            },
        }

        prompt();
    }

    controller.teardown();
    Ok(())
}

fn parse_center(input: &str) -> Option<Coordinate> {
    let mut parts = input.split_whitespace();
    let longitude = parts.next()?.parse().ok()?;
    let latitude = parts.next()?.parse().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some(Coordinate::new(longitude, latitude))
}

fn print_overlay(controller: &MapController<MemoryWidget>) {
    let Some(widget) = controller.widget() else {
        return;
    };

    let Some(camera) = widget.camera() else {
        return;
    };

    println!(
        "circle at ({}, {}), {} layers, zoom {}",
        camera.center.longitude,
        camera.center.latitude,
        widget.layer_ids().len(),
        camera.zoom,
    );
}

fn print_geojson(controller: &MapController<MemoryWidget>) {
    let source = controller.widget().and_then(|w| w.get_source(CIRCLE_SOURCE_ID));

    match source {
        Some(source) => match serde_json::to_string_pretty(&source.data) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to serialize overlay: {e}"),
        },
        None => println!("no overlay"),
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
