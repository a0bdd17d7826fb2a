fn main() {
    if let Err(err) = gorph::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
