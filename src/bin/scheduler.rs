//! Walks a priority queue through a short task-scheduling script.
//!
//! ```bash
//! cargo run --bin scheduler
//! ```

use std::io::{self, Write};

use rust_binary_heaps::scheduler::simulate_scheduler;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    simulate_scheduler(&mut out)?;
    out.flush()
}
