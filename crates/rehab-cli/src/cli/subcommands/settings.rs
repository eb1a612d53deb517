use clap::{Args, Subcommand};

/// Site settings commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show the settings row, creating it with defaults on first use.
    Get,
    /// Update settings. Only the flags given are changed; an empty string clears a text field.
    Set(SettingsSetArgs),
    /// Resolved contact details with WhatsApp, phone and email links.
    Contact,
}

#[derive(Clone, Debug, Args)]
pub struct SettingsSetArgs {
    #[arg(long)]
    pub gallery_enabled: Option<bool>,
    /// 1 to 1000.
    #[arg(long)]
    pub max_gallery_images: Option<u32>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone_primary: Option<String>,
    #[arg(long)]
    pub phone_secondary: Option<String>,
    #[arg(long)]
    pub phone_tertiary: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub whatsapp_number: Option<String>,
}
