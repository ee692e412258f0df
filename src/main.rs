//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

mod app;
mod document;
mod panels;
mod toggle;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    app::run()
}
