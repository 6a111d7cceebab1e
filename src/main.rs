fn main() {
    if let Err(err) = callout_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
