use anyhow::Result;

use tally::App;

fn main() -> Result<()> {
    // Logging is initialized in App::run() with buffer support
    App::new().run()?;

    Ok(())
}
