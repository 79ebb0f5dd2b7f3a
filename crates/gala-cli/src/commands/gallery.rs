use clap::Subcommand;
use gala_core::{CoreError, GalleryViewer, PageConfig};
use serde_json::json;

#[derive(Subcommand)]
pub enum GalleryAction {
    /// List the configured gallery items
    List,
    /// Select an item, then print the viewer state
    Select {
        /// Item id (unknown ids are silently ignored)
        id: String,
    },
    /// Select each configured item in order, then dismiss
    Cycle,
}

pub fn run(action: GalleryAction) -> Result<(), CoreError> {
    let config = PageConfig::load()?;
    let mut viewer = GalleryViewer::new(config.gallery.items);

    match action {
        GalleryAction::List => {
            println!("{}", serde_json::to_string_pretty(viewer.items())?);
        }
        GalleryAction::Select { id } => {
            if let Some(event) = viewer.select(&id) {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "active": viewer.active() }))?
            );
        }
        GalleryAction::Cycle => {
            for id in viewer.items().to_vec() {
                if let Some(event) = viewer.select(&id) {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
            }
            if let Some(event) = viewer.dismiss() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
    }
    Ok(())
}
