// This binary crate is intentionally minimal.
// All neural network logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example quarters
fn main() {
    println!("gradnet: a minimal feedforward neural network in Rust.");
    println!("Run `cargo run --example quarters` to see the training demo.");
}
