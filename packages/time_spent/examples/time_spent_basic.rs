//! Runs a few worker threads with instrumented regions for a few seconds, so the periodic
//! reports can be observed on the terminal.
//!
//! Each worker spends roughly half of its time in `HASH_BLOCK` and a quarter in `SLEEPY_IO`.

use std::thread;
use std::time::{Duration, Instant};

const RUN_TIME: Duration = Duration::from_millis(3500);
const WORKERS: usize = 3;

time_spent::define_counter! {
    /// CPU-bound hashing of a data block.
    HASH_BLOCK,

    /// Simulated waiting for I/O.
    SLEEPY_IO,
}

fn hash_block(seed: u64) -> u64 {
    time_spent::time_region!(HASH_BLOCK);

    let deadline = Instant::now() + Duration::from_millis(2);
    let mut hash = seed;

    while Instant::now() < deadline {
        hash = hash.rotate_left(5) ^ hash.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    }

    hash
}

fn sleepy_io() {
    time_spent::time_region!(SLEEPY_IO);

    thread::sleep(Duration::from_millis(1));
}

fn main() {
    println!("=== time_spent basic example ===");
    println!("Running {WORKERS} workers for {RUN_TIME:?}, expect about one report per counter per worker per second.");

    thread::scope(|s| {
        for worker in 0..WORKERS {
            s.spawn(move || {
                let started = Instant::now();
                let mut hash = u64::try_from(worker).expect("worker index fits in u64");

                while started.elapsed() < RUN_TIME {
                    hash = hash_block(hash);
                    sleepy_io();
                    thread::sleep(Duration::from_millis(1));
                }

                std::hint::black_box(hash);
            });
        }
    });

    println!("Example completed.");
}
