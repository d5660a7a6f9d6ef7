// src/bin/cli.rs
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    mod_scrape::cli::main_entry()
}
