use crate::profile_commands::ProfileCommands;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Verify an account and cache it locally
    SignIn {
        /// Account email
        #[arg(long)]
        email: String,

        /// Session token to store for later commands
        #[arg(long)]
        session_token: Option<String>,
    },

    /// Profile page operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Status chart for one category, optionally exported as CSV
    Chart {
        /// Category bucket (Core, ERC, Networking, Interface, Meta, Informational)
        #[arg(long, default_value = "Core")]
        category: String,

        /// Chart type driving export links (EIPs, ERCs, RIPs)
        #[arg(long = "type", default_value = "EIPs")]
        chart_type: String,

        /// First year (inclusive)
        #[arg(long)]
        from: Option<i32>,

        /// Last year (inclusive)
        #[arg(long)]
        to: Option<i32>,

        /// Directory to write the CSV export into
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Raw status changes grouped by repository
    StatusChanges,
}
