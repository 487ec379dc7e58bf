fn main() {
    if let Err(err) = carenav::cli::main() {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
}
