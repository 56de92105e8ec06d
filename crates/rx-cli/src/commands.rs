use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Sign in and persist the session token
    Login {
        #[arg(long)]
        email: String,

        /// Falls back to RX_PASSWORD so it stays out of shell history
        #[arg(long, env = "RX_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Register a customer account from a JSON form
    Register {
        /// Path to the registration form (camelCase JSON)
        #[arg(long)]
        form: PathBuf,
    },

    /// Sign out and forget the persisted token
    Logout,

    /// Validate the persisted session against the backend
    Status,

    /// Check a registration form locally without contacting the backend
    Validate {
        #[arg(long)]
        form: PathBuf,
    },
}

impl Commands {
    /// Login and registration screens are only for signed-out users
    pub fn is_public_only(&self) -> bool {
        matches!(self, Self::Login { .. } | Self::Register { .. })
    }
}
