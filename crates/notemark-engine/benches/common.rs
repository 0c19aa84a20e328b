// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_paragraph(repeats: usize) -> String {
    let base = "Met with @[anna smith] about the *launch* plan, _tentatively_ next week. ";
    base.repeat(repeats)
}

#[allow(dead_code)]
pub fn generate_plain(len: usize) -> String {
    "lorem ipsum ".chars().cycle().take(len).collect()
}
