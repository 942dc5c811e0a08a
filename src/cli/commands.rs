use clap::{Parser, Subcommand};

/// `connaudit` - AI-assisted repository connectivity audit for CI.
#[derive(Parser, Debug)]
#[command(name = "connaudit")]
#[command(version = "0.1.0")]
#[command(about = "Ask a chat-completion model for connectivity suggestions.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the connectivity audit and print the model's suggestions
    Audit {
        /// Model to use (skips remote resolution)
        #[arg(long)]
        model: Option<String>,

        /// Resolve the model from the remote rules document for this use case
        #[arg(long)]
        use_case: Option<String>,

        /// Importance label passed through to the resolver
        #[arg(long, default_value = "normal")]
        importance: String,

        /// Print the raw response body when it lacks message content
        #[arg(long)]
        raw_fallback: bool,
    },

    /// Resolve a model selection and print it as JSON
    Resolve {
        /// Use case key to look up in the rules document
        use_case: String,

        /// Module label passed through unchanged
        #[arg(long, default_value = "connaudit")]
        module: String,

        /// Importance label passed through unchanged
        #[arg(long, default_value = "normal")]
        importance: String,
    },

    /// Print the gathered repository context blob
    Context,
}
