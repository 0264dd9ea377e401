fn main() {
    repurge::app::cli::run();
}
