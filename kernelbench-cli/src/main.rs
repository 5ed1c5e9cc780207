fn main() -> anyhow::Result<()> {
    kernelbench_cli::run()
}
