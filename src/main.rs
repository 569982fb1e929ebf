/// Command-line front desk for the walk-in queue.
///
/// This module provides an interactive CLI for registering patients,
/// calling the next one, cancelling and searching, and viewing the
/// queue with its statistics.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use walkin_queue::config::{DEFAULT_CONSULTATION_MINUTES, DEFAULT_LOG_FILTER};
use walkin_queue::{
    estimated_wait_minutes, DeskConfig, DualLaneQueue, PatientForm, PatientRecord, Specialty,
};

/// Walk-in queue front desk
#[derive(Parser, Debug)]
#[command(name = "walkin-queue")]
#[command(about = "Two-lane walk-in queue for a medical front desk")]
struct Args {
    /// Minutes per consultation used for wait estimates
    #[arg(short, long, env = "WALKIN_CONSULTATION_MINUTES", default_value_t = DEFAULT_CONSULTATION_MINUTES)]
    consultation_minutes: i64,

    /// Log filter (tracing directive syntax)
    #[arg(short, long, env = "WALKIN_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_level: String,
}

struct FrontDeskCLI {
    queue: DualLaneQueue,
    config: DeskConfig,
    running: bool,
}

impl FrontDeskCLI {
    fn new(config: DeskConfig) -> Self {
        FrontDeskCLI {
            queue: DualLaneQueue::new(),
            config,
            running: true,
        }
    }

    fn print_header(&self) {
        println!("\n{}", "=".repeat(60));
        println!("       WALK-IN PATIENT QUEUE");
        println!("{}", "=".repeat(60));
    }

    fn print_menu(&self) {
        println!("\n--- Main Menu ({} waiting) ---", self.queue.size());
        println!("1. Register patient");
        println!("2. Call next patient");
        println!("3. Cancel patient");
        println!("4. Search patient");
        println!("5. Check waiting time");
        println!("6. View queue");
        println!("7. Statistics");
        println!("8. Run demo");
        println!("9. Exit");
        println!("{}", "-".repeat(20));
    }

    /// Read one trimmed line. End of input stops the main loop.
    fn get_input(&mut self, prompt: &str, default: Option<&str>) -> String {
        if let Some(def) = default {
            print!("{} [{}]: ", prompt, def);
        } else {
            print!("{}: ", prompt);
        }
        let _ = io::stdout().flush();

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) => {
                self.running = false;
                return default.unwrap_or("").to_string();
            }
            Ok(_) => {}
            Err(e) => {
                error!("failed to read input: {}", e);
                self.running = false;
                return default.unwrap_or("").to_string();
            }
        }

        let input = input.trim();
        if input.is_empty() {
            default.unwrap_or("").to_string()
        } else {
            input.to_string()
        }
    }

    fn get_int_input(&mut self, prompt: &str, default: Option<i32>) -> i32 {
        loop {
            let default_str = default.map(|d| d.to_string());
            let input = self.get_input(prompt, default_str.as_deref());

            if let Ok(value) = input.parse::<i32>() {
                return value;
            }
            if !self.running {
                return default.unwrap_or(0);
            }
            println!("Please enter a valid number");
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.get_input(&format!("{} (y/n)", prompt), Some("n"))
            .eq_ignore_ascii_case("y")
    }

    fn register_patient(&mut self) {
        println!("\n--- Register Patient ---");

        let name = self.get_input("Patient name", None);
        let phone = self.get_input("Phone (digits only)", None);
        let visit_date = self.get_input("Visit date (dd/mm/yyyy, blank for today)", None);
        let visit_time = self.get_input("Visit time (HH:MM, blank for now)", None);

        println!("\nSpecialties:");
        for (i, specialty) in Specialty::ALL.iter().enumerate() {
            println!("  {}. {}", i + 1, specialty.name());
        }
        let specialty = self.get_input("Select specialty (number or name)", None);
        let is_emergency = self.confirm("Emergency?");

        let form = PatientForm {
            name,
            phone,
            visit_date,
            visit_time,
            specialty,
            is_emergency,
        };

        match form.validate() {
            Ok(record) => {
                let record_id = record.record_id();
                let lane = record.lane();
                let name = record.name().to_string();
                let specialty = record.specialty();
                self.queue.enqueue(record);

                println!("\nPatient added to {} lane", lane.label());
                println!("  Name: {}", name);
                println!("  Specialty: {}", specialty.name());
                if let Some(position) = self.queue.position_of(record_id) {
                    println!("  Position: {}", position);
                }
            }
            Err(e) => {
                println!("\nREGISTRATION REJECTED");
                for reason in e.reasons() {
                    println!("  - {}", reason);
                }
            }
        }
    }

    fn call_next_patient(&mut self) {
        match self.queue.dequeue() {
            Some(patient) => {
                println!("\n--- NEXT PATIENT ---");
                println!("  {}", patient.name());
                println!("  Type: {}", patient.lane().label());
                println!("  Specialty: {}", patient.specialty().name());
                println!("  Phone: {}", patient.phone());
            }
            None => println!("\nNo patients waiting"),
        }
    }

    fn cancel_patient(&mut self) {
        if self.queue.is_empty() {
            println!("\nNo patients to cancel");
            return;
        }

        println!("\n--- Cancel Patient ---");
        self.print_queue();

        let name = self.get_input("Patient name to cancel (blank to go back)", None);
        if name.is_empty() {
            return;
        }

        if self.queue.find_by_name(&name).is_none() {
            println!("\nPatient {} is not in the queue", name);
            return;
        }

        if !self.confirm(&format!("Cancel visit for {}?", name)) {
            return;
        }

        match self.queue.remove_by_name(&name) {
            Some(patient) => println!("\nVisit for {} cancelled", patient.name()),
            None => println!("\nCould not cancel"),
        }
    }

    fn print_found(&self, patient: &PatientRecord, position: usize, detailed: bool) {
        let estimated = estimated_wait_minutes(position, self.config.consultation_minutes);

        println!("\n  Patient: {}", patient.name());
        println!("  Position: {}", position);
        if detailed {
            println!("  Type: {}", patient.lane().label());
            println!("  Specialty: {}", patient.specialty().name());
        }
        println!("  Waiting: {} min", patient.wait_minutes());
        println!("  Estimated wait: {} min", estimated);
    }

    fn search_patient(&mut self, detailed: bool) {
        let name = self.get_input("Patient name", None);
        if name.is_empty() {
            println!("\nPlease enter a patient name");
            return;
        }

        match self.queue.find_by_name(&name) {
            Some(hit) => self.print_found(hit.record, hit.position, detailed),
            None => println!("\nPatient {} is not in the queue", name),
        }
    }

    fn print_queue(&self) {
        let rows = self.queue.snapshot();
        if rows.is_empty() {
            println!("\nQueue is empty");
            return;
        }

        println!(
            "\n{:>4}  {:20} {:12} {:6} {:17} {:10} {:>7}",
            "#", "Name", "Phone", "Time", "Specialty", "Type", "Waiting"
        );
        for row in &rows {
            println!(
                "{:>4}  {:20} {:12} {:6} {:17} {:10} {:>3} min",
                row.position,
                row.name,
                row.phone,
                row.visit_time,
                row.specialty.name(),
                row.lane_label(),
                row.wait_minutes
            );
        }
    }

    fn print_statistics(&self) {
        let stats = self.queue.statistics();

        println!("\n--- Statistics ---");
        println!("  Total: {}", stats.total);
        println!("  Emergencies: {}", stats.emergencies);
        println!("  Normal: {}", stats.normals);
        println!("  Average wait: {} min", stats.average_wait_minutes);

        match self.queue.peek() {
            Some(next) => println!(
                "\n  Next: {} ({}, {})",
                next.name(),
                next.lane().label(),
                next.specialty().name()
            ),
            None => println!("\n  Next: no patients waiting"),
        }
    }

    fn run_demo(&mut self) {
        println!("\n--- Running Demo ---");

        let mut queue = DualLaneQueue::new();
        let visits = [
            ("Ana", "111", Specialty::GeneralMedicine, false),
            ("Bea", "222", Specialty::Dermatology, false),
            ("Cid", "333", Specialty::Cardiology, true),
        ];

        for (name, phone, specialty, is_emergency) in visits {
            let lane = if is_emergency { "EMERGENCY" } else { "normal" };
            println!("  - {}: {} ({})", name, specialty.name(), lane);
            queue.enqueue(PatientRecord::new(
                name.to_string(),
                phone.to_string(),
                String::new(),
                String::new(),
                specialty,
                is_emergency,
            ));
        }

        println!("\nQueue order:");
        for row in queue.snapshot() {
            println!("  [{:9}] {}. {}", row.lane_label(), row.position, row.name);
        }

        if let Some(hit) = queue.find_by_name("bea") {
            println!(
                "\nBea is at position {}, estimated wait {} min",
                hit.position,
                estimated_wait_minutes(hit.position, self.config.consultation_minutes)
            );
        }

        println!("\nCalling patients:");
        while let Some(patient) = queue.dequeue() {
            println!("  -> {} ({})", patient.name(), patient.lane().label());
        }

        println!("\nNote: emergency patient Cid was called first,");
        println!("even though Ana and Bea registered earlier.");
    }

    fn run(&mut self) {
        self.print_header();

        while self.running {
            self.print_menu();

            let choice = self.get_int_input("Enter choice", Some(6));
            if !self.running {
                break;
            }

            match choice {
                1 => self.register_patient(),
                2 => self.call_next_patient(),
                3 => self.cancel_patient(),
                4 => self.search_patient(true),
                5 => self.search_patient(false),
                6 => self.print_queue(),
                7 => self.print_statistics(),
                8 => self.run_demo(),
                9 => {
                    self.running = false;
                    println!("\nGoodbye!");
                }
                _ => println!("Invalid choice"),
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = DeskConfig::new(args.consultation_minutes, args.log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(io::stderr)
        .init();

    info!(
        consultation_minutes = config.consultation_minutes,
        "starting front desk"
    );

    let mut cli = FrontDeskCLI::new(config);
    cli.run();

    info!(remaining = cli.queue.size(), "front desk closed");
    Ok(())
}
