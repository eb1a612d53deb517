use clap::Subcommand;

/// Gallery commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GalleryCommands {
    /// List images in display order (visible only unless `--all`).
    List {
        #[arg(long)]
        all: bool,
    },
    /// Upload an image file and add it to the end of the gallery.
    Add {
        /// Image file to upload.
        file: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Swap an image with its neighbor.
    Move {
        id: String,
        #[arg(value_parser = ["up", "down"])]
        direction: String,
    },
    /// Show or hide an image on the public gallery.
    Toggle {
        id: String,
        #[arg(long, conflicts_with = "hide")]
        show: bool,
        #[arg(long)]
        hide: bool,
    },
    /// Delete an image row and its stored file.
    Delete { id: String },
}
