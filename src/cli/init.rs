use tdhistory::error::Result;
use tdhistory::settings::{save_settings, settings_path, Settings};

pub fn run(force: bool) -> Result<()> {
    let path = settings_path();
    if path.exists() && !force {
        println!("Settings already exist at {} (use --force to reset)", path.display());
        return Ok(());
    }
    save_settings(&Settings::default())?;
    println!("Wrote {}", path.display());
    Ok(())
}
