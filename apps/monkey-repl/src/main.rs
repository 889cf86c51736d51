fn main() {
    if let Err(err) = monkey_repl::run_cli() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
