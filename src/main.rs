fn main() {
    sitegen::app::cli::run();
}
