use clap::Subcommand;

/// Contact message commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MessageCommands {
    /// Submit the public contact form.
    Submit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// List messages, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a message by ID.
    Get { id: String },
    /// Delete a message.
    Delete { id: String },
}
