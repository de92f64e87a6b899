use std::process;

fn main() {
    if let Err(err) = boxmerge::run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
