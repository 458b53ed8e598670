fn main() {
    if let Err(err) = noteboard::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
