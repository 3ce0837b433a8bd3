use std::process;

fn main() {
    if let Err(e) = tabtab::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
