fn main() {
    if let Err(e) = docfill::logging::init() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    docfill::app::cli::run();
}
