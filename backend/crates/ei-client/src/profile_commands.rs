use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Load and print the verified profile
    Show,
    /// Re-read the subscription tier from the server
    Refresh,
    /// Change the display name
    Rename {
        /// New display name
        name: String,
    },
    /// Change the password
    Password {
        #[arg(long = "new")]
        new_password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Cancel the premium subscription
    Cancel,
    /// Clear the local session
    Logout,
}
