use clap::{Parser, Subcommand};
use jobdeck::view::TypeFilter;
use jobdeck::workflow::{Theme, ViewMode};
use tracing::{debug, error};

/// Manage job postings on a remote job board from the terminal
#[derive(Parser)]
#[command(name = "jobdeck")]
#[command(about = "Job board client - list, search, edit, and analyze job postings", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List job postings (default command)
    List {
        /// Keep only postings whose title, company, or location contains this term
        #[arg(short, long)]
        search: Option<String>,

        /// Keep only postings of one type (Full-time, Part-time, Contract, Remote, Hybrid, or all)
        #[arg(short = 't', long = "type")]
        job_type: Option<TypeFilter>,

        /// Render as grid or list, overriding the configured mode
        #[arg(short, long)]
        mode: Option<ViewMode>,
    },
    /// Show one posting in full
    Show {
        /// Store identifier of the posting
        id: i64,
    },
    /// Create a new posting interactively
    Add,
    /// Edit an existing posting interactively
    Edit {
        /// Store identifier of the posting
        id: i64,
    },
    /// Delete a posting
    Delete {
        /// Store identifier of the posting
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show dashboard statistics
    Stats,
    /// Show or update configuration
    Config {
        /// Base URL of the job board API
        #[arg(long)]
        api_url: Option<String>,

        /// Color theme (dark or light)
        #[arg(long)]
        theme: Option<Theme>,

        /// Jobs view rendering (grid or list)
        #[arg(long)]
        view_mode: Option<ViewMode>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("jobdeck started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Some(Commands::List {
            search,
            job_type,
            mode,
        }) => jobdeck::cli::run_list(search, job_type, mode).await,
        Some(Commands::Show { id }) => jobdeck::cli::run_show(id).await,
        Some(Commands::Add) => jobdeck::cli::run_add().await,
        Some(Commands::Edit { id }) => jobdeck::cli::run_edit(id).await,
        Some(Commands::Delete { id, yes }) => jobdeck::cli::run_delete(id, yes).await,
        Some(Commands::Stats) => jobdeck::cli::run_stats().await,
        Some(Commands::Config {
            api_url,
            theme,
            view_mode,
        }) => jobdeck::cli::run_config(api_url, theme, view_mode),
        None => jobdeck::cli::run_list(None, None, None).await,
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
