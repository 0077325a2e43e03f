//! quickstart — end-to-end walkthrough of the rust_lot allocation library.
//!
//! Drives a 2-spot lot through the full lifecycle against an SQLite-backed
//! store: three allocation requests (the third queues), a round-robin
//! deallocation that hands the freed spot to the waiting vehicle, and a
//! final reset.  Records are printed as JSON, the same shape a service
//! boundary would return.

use std::path::Path;

use anyhow::Result;

use lot_alloc::{AllocationManager, AllocationOutcome};
use lot_core::Spot;
use lot_store::{SpotStore, SqliteStore};

const DB_PATH: &str = "output/parking.db";
const PLATES: [&str; 3] = ["KA-01-HH-1234", "MH-12-AB-9876", "DL-03-CC-4455"];

fn print_spot_table(spots: &[Spot]) {
    println!("{:<8} {:<10} {:<14}", "Spot", "Occupied", "Plate");
    println!("{}", "-".repeat(32));
    for spot in spots {
        println!(
            "{:<8} {:<10} {:<14}",
            spot.id.0,
            if spot.occupied { "yes" } else { "no" },
            spot.vehicle_plate.as_deref().unwrap_or("-"),
        );
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== quickstart — rust_lot parking allocation ===");
    println!();

    std::fs::create_dir_all("output")?;
    let store = SqliteStore::open(Path::new(DB_PATH))?;
    let mut manager = AllocationManager::new(store)?;

    // Start from a clean lot even if the database file already existed.
    manager.reset()?;
    println!("Lot ready: {} free spots", manager.available_spots()?.len());
    println!();

    // 1. Three allocation requests against a 2-spot lot.
    for plate in PLATES {
        match manager.allocate(plate)? {
            AllocationOutcome::Assigned(spot) => {
                println!("POST /allocate {plate} -> 200");
                println!("{}", serde_json::to_string_pretty(&spot)?);
            }
            AllocationOutcome::Queued(vehicle) => {
                println!("POST /allocate {plate} -> 201 (queued)");
                println!("{}", serde_json::to_string_pretty(&vehicle)?);
            }
        }
        println!();
    }

    // 2. Current state: no free spots, one waiting vehicle.
    println!("GET /available-spots -> {} free", manager.available_spots()?.len());
    let waiting = manager.waiting_queue();
    println!(
        "GET /waiting-queue   -> {}",
        serde_json::to_string(&waiting)?
    );
    println!();
    print_spot_table(&manager.store().all_spots()?);

    // 3. Round-robin deallocation: frees spot 1 and immediately hands it to
    //    the queued vehicle.
    let spot = manager.deallocate_and_assign()?;
    println!("DELETE /deallocate -> 200");
    println!("{}", serde_json::to_string_pretty(&spot)?);
    println!();
    print_spot_table(&manager.store().all_spots()?);

    // 4. Reset on the way out so the next run starts from a clean lot.
    manager.reset()?;
    println!("DELETE /reset -> 200");
    println!(
        "Lot reset: {} free spots, queue empty",
        manager.available_spots()?.len()
    );

    Ok(())
}
