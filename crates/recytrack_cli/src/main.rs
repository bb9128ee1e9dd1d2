//! Interactive text-menu front end for the recycling tracker.
//!
//! # Responsibility
//! - Prompt for plain-text fields on stdin and print results to stdout.
//! - Translate menu input into `TrackerService` calls; no business logic here.
//!
//! All data lives in memory and is lost when the process exits.

use recytrack_core::{
    core_version, default_log_level, init_logging, MemoryRecordStore, Record, RecordUpdate,
    TrackerService,
};
use std::io::{self, BufRead, Write};

type Service = TrackerService<MemoryRecordStore>;
type InputLines = io::Lines<io::StdinLock<'static>>;

fn main() {
    init_file_logging();

    let mut service = TrackerService::new(MemoryRecordStore::new());
    let mut lines = io::stdin().lines();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "Enter your choice (1-7): ") else {
            break;
        };

        let keep_going = match choice.trim() {
            "1" => create_flow(&mut lines, &mut service),
            "2" => read_flow(&mut lines, &service),
            "3" => update_flow(&mut lines, &mut service),
            "4" => delete_flow(&mut lines, &mut service),
            "5" => log_effort_flow(&mut lines, &mut service),
            "6" => {
                print_report(&service);
                Some(())
            }
            "7" => {
                println!("Exiting the program.");
                None
            }
            _ => {
                println!("Invalid choice. Please enter a number between 1 and 7.");
                Some(())
            }
        };

        if keep_going.is_none() {
            break;
        }
    }
}

// File logging is best effort for an interactive tool: a failure downgrades
// to a warning instead of aborting the menu.
fn init_file_logging() {
    let log_dir = std::env::temp_dir().join("recytrack-logs");
    let Some(log_dir) = log_dir.to_str() else {
        eprintln!("warning: file logging disabled: log directory is not valid UTF-8");
        return;
    };
    if let Err(err) = init_logging(default_log_level(), log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
}

fn print_menu() {
    println!();
    println!("=== Campus Recycling Tracker (v{}) ===", core_version());
    println!("1. Create Recycling Data");
    println!("2. Read Recycling Data");
    println!("3. Update Recycling Data");
    println!("4. Delete Recycling Data");
    println!("5. Log Recycling Efforts");
    println!("6. Generate Recycling Report");
    println!("7. Exit");
}

/// Prints a prompt and reads one stdin line. `None` means stdin closed.
fn prompt(lines: &mut InputLines, label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line),
        _ => None,
    }
}

fn create_flow(lines: &mut InputLines, service: &mut Service) -> Option<()> {
    let id = prompt(lines, "Enter recycling ID: ")?;
    let item = prompt(lines, "Enter item: ")?;
    let quantity_text = prompt(lines, "Enter quantity: ")?;
    let Ok(quantity) = quantity_text.trim().parse::<i64>() else {
        println!("Error: quantity must be an integer.");
        return Some(());
    };
    let date = prompt(lines, "Enter date (YYYY-MM-DD): ")?;

    match service.create_record(id.trim(), item.trim(), quantity, date.trim()) {
        Ok(()) => println!("Recycling data created successfully."),
        Err(err) => println!("Error: {err}"),
    }
    Some(())
}

fn read_flow(lines: &mut InputLines, service: &Service) -> Option<()> {
    let id = prompt(lines, "Enter recycling ID to read: ")?;
    match service.read_record(id.trim()) {
        Some(record) => print_record(&record),
        None => println!("Recycling ID not found."),
    }
    Some(())
}

fn update_flow(lines: &mut InputLines, service: &mut Service) -> Option<()> {
    let id = prompt(lines, "Enter recycling ID to update: ")?;
    let item = prompt(lines, "Enter new item (leave blank to keep current): ")?;
    let quantity_text = prompt(lines, "Enter new quantity (leave blank to keep current): ")?;
    let date = prompt(lines, "Enter new date (leave blank to keep current): ")?;

    let quantity = match quantity_text.trim() {
        "" => None,
        text => match text.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                println!("Error: quantity must be an integer.");
                return Some(());
            }
        },
    };

    let update = RecordUpdate {
        item: non_blank(&item),
        quantity,
        date: non_blank(&date),
    };

    match service.update_record(id.trim(), &update) {
        Ok(()) => println!("Recycling data updated successfully."),
        Err(err) => println!("Error: {err}"),
    }
    Some(())
}

fn delete_flow(lines: &mut InputLines, service: &mut Service) -> Option<()> {
    let id = prompt(lines, "Enter recycling ID to delete: ")?;
    match service.delete_record(id.trim()) {
        Ok(()) => println!("Recycling data deleted successfully."),
        Err(err) => println!("Error: {err}"),
    }
    Some(())
}

fn log_effort_flow(lines: &mut InputLines, service: &mut Service) -> Option<()> {
    let id = prompt(lines, "Enter recycling ID to log efforts: ")?;
    match service.log_effort(id.trim()) {
        Ok(()) => println!("Recycling efforts logged successfully."),
        Err(err) => println!("Error: {err}"),
    }
    Some(())
}

fn print_report(service: &Service) {
    let report = service.generate_report();
    println!("=== Recycling Report ===");
    println!("Total Entries: {}", report.total_entries);
    println!("Total Quantity: {}", report.total_quantity);
    for record in &report.entries {
        print_record(record);
    }
}

fn print_record(record: &Record) {
    println!(
        "id={} item={} quantity={} date={}",
        record.id, record.item, record.quantity, record.date
    );
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
