//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `checklist_core` linkage.
//! - Report the resolved data directory and today's completion read-only.

use checklist_core::{DayService, FileDayStore, StoreConfig};
use chrono::Local;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("checklist_core ping={}", checklist_core::ping());
    println!("checklist_core version={}", checklist_core::core_version());

    let store = match FileDayStore::new(StoreConfig::from_env()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("checklist_core config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!(
        "checklist_core data_dir={}",
        store.config().data_dir().display()
    );

    let service = DayService::new(store);
    let today = Local::now().date_naive();
    println!(
        "checklist_core today_file={}",
        service.store().record_path(today).display()
    );
    match service.completion(today) {
        Ok(completion) => {
            let (done, total) = completion.as_pair();
            println!("checklist_core today={today} done={done} total={total}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("checklist_core store error: {err}");
            ExitCode::FAILURE
        }
    }
}
