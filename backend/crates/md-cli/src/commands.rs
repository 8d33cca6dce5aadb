use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the reconciled authentication state
    Status,

    /// Move the legacy login into the signed-in managed identity
    Migrate,

    /// Delete the legacy login without migrating it
    ClearLegacy,

    /// Store a legacy login and print its landing path
    LegacyLogin {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// patient, professional or admin
        #[arg(long, default_value = "patient")]
        role: String,
    },

    /// Delete the legacy login
    LegacyLogout,

    /// Sign out of the managed identity and drop the legacy login
    SignOut,

    /// Check whether the current user holds any of the roles
    HasRole {
        #[arg(required = true)]
        roles: Vec<String>,
    },

    /// Print the landing path for a role
    Redirect { role: String },

    /// Print the current user's profile, preferring the backend copy
    Profile,

    /// Print a diagnostic snapshot of every source
    Debug,
}
