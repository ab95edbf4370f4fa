fn main() {
    holdem_cli::cli::run();
}
