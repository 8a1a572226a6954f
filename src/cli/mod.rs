use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Suggest team building activities for a team
    Ideas {
        /// Number of people on the team
        #[arg(short = 's', long, default_value = "10")]
        team_size: u32,

        /// How long the activities may take (e.g. "2 hours", "half day")
        #[arg(short, long, default_value = "2 hours")]
        duration: String,

        /// Budget per person in dollars
        #[arg(short, long, default_value = "500")]
        budget: u32,

        /// Comma-separated preferences (e.g. "outdoor, creative")
        #[arg(short, long)]
        preferences: Option<String>,
    },

    /// Design a custom activity from a free-text description
    Custom {
        description: String,

        /// Constraints as a JSON object (e.g. '{"max_budget": 300}')
        #[arg(short, long)]
        constraints: Option<String>,
    },

    /// Analyze team dynamics and recommend activities
    Analyze {
        /// Team information as a JSON object
        #[arg(short, long)]
        team_info: String,
    },
}
