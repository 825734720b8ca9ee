use tdhistory::error::Result;
use tdhistory::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let registry = settings.registry()?;
    for column in registry.columns() {
        match settings.column_aliases.get(column) {
            Some(target) => println!("{column} (as {target})"),
            None => println!("{column}"),
        }
    }
    Ok(())
}
