fn main() {
    if let Err(err) = word_dictionary::cli::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
