use clap::Subcommand;

/// Admin access commands. These never touch the database.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Decide how a request for a path is handled.
    Gate {
        path: String,
        /// Treat the request as coming from a signed-in admin.
        #[arg(long)]
        authenticated: bool,
    },
    /// Validate login form input before it reaches the identity provider.
    CheckLogin {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
}
