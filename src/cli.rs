use clap::Parser;

/// Snapshot management for a search cluster over its REST API.
#[derive(Parser)]
#[command(name = "snapctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Snapshot repository to operate on
    #[arg(short = 'b', long)]
    pub repository: Option<String>,

    /// Snapshot name
    #[arg(short = 'n', long)]
    pub snapshot: Option<String>,

    /// Comma-separated list of indices (all data if not provided)
    #[arg(short = 'i', long)]
    pub indices: Option<String>,

    /// Filesystem location backing a newly registered repository
    #[arg(short = 't', long, default_value = "/tmp")]
    pub location: String,

    /// List snapshots instead of creating one
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Restore the named snapshot (must match --snapshot)
    #[arg(short = 'r', long, value_name = "SNAPSHOT")]
    pub restore: Option<String>,

    /// Cluster REST endpoint
    #[arg(short = 'e', long, default_value = "http://localhost:9200")]
    pub endpoint: String,

    /// Value for wait_for_completion on full snapshot creation
    #[arg(short = 'w', long, default_value = "yes")]
    pub wait: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    List,
    Restore { target: &'a str },
    Create,
}

impl Cli {
    /// Which operation the flag combination selects. Listing is read-only
    /// and wins over restore, which wins over the create default.
    pub fn mode(&self) -> Mode<'_> {
        if self.list {
            Mode::List
        } else if let Some(target) = self.restore.as_deref() {
            Mode::Restore { target }
        } else {
            Mode::Create
        }
    }
}
