fn main() -> Result<(), Box<dyn std::error::Error>> {
    appspark::cli::main()
}
