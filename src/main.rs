mod cli;
mod error;
mod model;
mod render;
mod service;

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, Level};

use cli::Args;
use render::{info_panel, status_line, MapView};
use service::{Debouncer, HostSensor, IpLookup, IpinfoClient, LocationTracker, View};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse().merge_with_config()?;
    args.validate()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    info!(
        "IP tracker starting (api={}, debounce={}ms, zoom={})",
        args.api_url, args.debounce_ms, args.zoom
    );

    let client = IpinfoClient::new(&args.api_url, &args.token);
    let sensor = HostSensor::new(args.position.clone());

    let mut tracker = LocationTracker::new();
    tracker.mount(&sensor).await;

    // One-shot mode: resolve the given target, render, exit
    if let Some(target) = args.target.clone() {
        tracker.set_input(&target);
        tracker.resolve(&client, &target).await;
        render(&tracker, &args)?;
        if tracker.location().is_none() {
            info!("No coordinate available for {}", target);
        }
        return Ok(());
    }

    render(&tracker, &args)?;
    println!("Search for any IP address or domain (Ctrl-D to quit):");

    let (tx, mut submissions) = mpsc::unbounded_channel();
    let debouncer = Debouncer::new(Duration::from_millis(args.debounce_ms), move |target| {
        let _ = tx.send(target);
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        tracker.set_input(&line);
                        debug!("Query input: {:?}", tracker.input());
                        tracker.submit(&debouncer);
                    }
                    None => break,
                }
            }
            Some(target) = submissions.recv() => {
                tracker.begin_lookup(&target);
                if tracker.is_loading() {
                    render(&tracker, &args)?;
                    let outcome = client.lookup(&target).await;
                    tracker.apply_lookup(&target, outcome);
                }
                render(&tracker, &args)?;
            }
        }
    }

    info!("IP tracker exiting");
    Ok(())
}

/// Print the dashboard for the current state and, when a coordinate is
/// resolved, rewrite the map page for it.
fn render(tracker: &LocationTracker, args: &Args) -> Result<()> {
    let view = tracker.view();

    println!();
    print!("{}", info_panel(tracker.ip_info()));
    println!("  {}", status_line(view));

    if let View::Map(coord) = view {
        let map = MapView::centered(coord, args.zoom);
        map.write_page(Path::new(&args.map_file))?;
        println!("  Map page: {}", args.map_file);
    }

    Ok(())
}
