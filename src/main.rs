//! # Voxel World Entry Point
//!
//! Builds the world once and logs what was built. Calls into the library's `run()`.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- world.json
//! ```

fn main() {
    if let Err(err) = voxel_world::run() {
        log::error!("{err}");
        eprintln!("voxel-world: {err}");
        std::process::exit(1);
    }
}
