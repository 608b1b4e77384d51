//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `moodlog_core` linkage.
//! - Print derived stats for a snapshot file when one is given.

use moodlog_core::{AppService, FileSnapshotStore, NullNotifier};

fn main() {
    println!("moodlog_core ping={}", moodlog_core::ping());
    println!("moodlog_core version={}", moodlog_core::core_version());

    if let Some(path) = std::env::args().nth(1) {
        let service = AppService::load(FileSnapshotStore::new(path), NullNotifier);
        let stats = service.stats();
        println!(
            "streak={} completed_today={} habits={} notes={}",
            stats.streak, stats.completed_today, stats.total_habits, stats.total_notes
        );
    }
}
