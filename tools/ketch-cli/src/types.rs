/// Main CLI structure
#[derive(clap::Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct KetchCli {
    #[command(subcommand)]
    pub command: KetchCommands,
}

impl KetchCli {
    pub fn verbose(&self) -> bool {
        matches!(&self.command, KetchCommands::Status { opt } if opt.verbose)
    }
}

/// Available CLI commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum KetchCommands {
    /// View the current status of projects and applications
    #[clap(aliases = &["st", "s"])]
    Status {
        #[clap(flatten)]
        opt: StatusOperation,
    },
    /// Context management operations
    #[clap(aliases = &["ctx"])]
    Context {
        #[command(subcommand)]
        opt: ContextOperation,
    },
}

/// Status display parameters
#[derive(clap::Args, Clone, Debug)]
pub struct StatusOperation {
    /// Target scope; defaults to the context's project when omitted
    #[arg(value_name = "PROJECT[/APP]")]
    pub target: Vec<String>,
    /// Application name (ignored when the target argument already names one)
    #[arg(short, long)]
    pub app: Option<String>,
    /// Display more details
    #[arg(short = 'V', long)]
    pub verbose: bool,
    /// Output the status information as JSON
    #[arg(long)]
    pub json: bool,
    /// Output status about every project on the server
    #[arg(long)]
    pub all_projects: bool,
}

/// Context operation commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum ContextOperation {
    /// Configure connection settings
    #[clap(aliases = &["s", "update"])]
    Set {
        /// Context name (defaults to current)
        name: Option<String>,
        /// Ketch server URL
        #[arg(long)]
        server: Option<String>,
        /// Default project for target resolution
        #[arg(long)]
        project: Option<String>,
    },
    /// Display current configuration
    #[clap(aliases = &["g"])]
    Get,
    /// Switch between contexts
    Select {
        /// Context name to switch to
        name: String,
    },
}
