use color_eyre::eyre::{Result, WrapErr, eyre};
use dotenv::dotenv;
use festsched_core::config::EventConfig;
use festsched_core::models::time_slot::SlotContent;
use festsched_core::validate;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = EventConfig::from_env()?;

    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load and validate the schedule data
    let raw = std::fs::read_to_string(&config.schedule_path)
        .wrap_err_with(|| format!("Failed to read schedule data from {}", config.schedule_path))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).wrap_err("Schedule data is not valid JSON")?;

    let schedule = match validate(&value) {
        Ok(schedule) => schedule,
        Err(errors) => {
            for violation in errors.iter() {
                error!(%violation, "schedule data rejected");
            }
            return Err(eyre!(
                "schedule data failed validation with {} error(s)",
                errors.len()
            ));
        }
    };
    info!(days = schedule.data.len(), "schedule data validated");

    // Print each day under its formatted header
    let headers = config.date_headers()?;
    for (header, (_, day)) in headers.iter().zip(schedule.days()) {
        println!("{header}");
        for slot in &day.times {
            match slot.content() {
                SlotContent::Label(label) => println!("  {:<13} {label}", slot.range()),
                SlotContent::Workshops(workshops) => {
                    println!("  {}", slot.range());
                    for workshop in workshops {
                        if workshop.prereqs.is_empty() {
                            println!(
                                "    {} with {} [{}]",
                                workshop.name, workshop.teachers, workshop.level
                            );
                        } else {
                            println!(
                                "    {} with {} [{}], prereqs: {}",
                                workshop.name, workshop.teachers, workshop.level, workshop.prereqs
                            );
                        }
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}
