//! numbench binary entry point.

fn main() -> anyhow::Result<()> {
    numbench_cli::run()
}
