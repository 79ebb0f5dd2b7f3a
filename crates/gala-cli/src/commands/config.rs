use clap::Subcommand;
use gala_core::{ConfigError, CoreError, PageConfig};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init,
    /// Print the configuration file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), CoreError> {
    match action {
        ConfigAction::Show => {
            let config = PageConfig::load()?;
            print!("{}", toml::to_string_pretty(&config).map_err(ConfigError::from)?);
        }
        ConfigAction::Init => {
            let path = PageConfig::default().save()?;
            println!("wrote {}", path.display());
        }
        ConfigAction::Path => {
            println!("{}", PageConfig::config_path()?.display());
        }
    }
    Ok(())
}
