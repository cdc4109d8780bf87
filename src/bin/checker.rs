use anyhow::Result;

fn main() -> Result<()> {
    verdictbox::cli::run()
}
