fn main() {
    if let Err(e) = modscope_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
