use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List members, optionally filtered
    List {
        /// Case-insensitive text matched against name and phone
        #[arg(long)]
        search: Option<String>,
        /// Only members with an outstanding loan
        #[arg(long)]
        loan_only: bool,
    },
    /// Add a blank member with the next serial number
    Add,
    /// Set one field of a member (admin only)
    Edit {
        /// Member ID
        id: String,
        /// name, phone, amount, savings, loan or interest
        field: String,
        /// New value; blank resets numeric fields to 0
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Validate and confirm a member's details (admin only)
    Update {
        /// Member ID
        id: String,
    },
    /// Remove a member (admin only)
    Delete {
        /// Member ID
        id: String,
    },
}
