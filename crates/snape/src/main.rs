fn main() {
    snape_cli::run_main();
}
