fn main() {
    btoa_ascii85::cli::run();
}
