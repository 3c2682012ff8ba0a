use log::{info, warn};

use crate::client::ClusterClient;
use crate::error::{Result, SnapctlError};

/// Take a snapshot, registering the repository on the fly if the cluster
/// does not know it yet.
pub fn create(
    client: &ClusterClient,
    repository: &str,
    snapshot: Option<&str>,
    indices: Option<&str>,
    location: &str,
    wait: &str,
) -> Result<()> {
    let snapshot = snapshot.ok_or(SnapctlError::MissingArgument("snapshot"))?;

    let probe = client.repository(repository)?;
    if probe.indicates_error() {
        warn!(
            "Repository {} is not registered, creating it at {}",
            repository, location
        );
        let registered = client.register_repository(repository, location)?;
        println!("{}", registered.body);
    }

    info!("Creating snapshot {} in repository {}", snapshot, repository);
    let response = match indices {
        Some(indices) => client.create_snapshot_selective(repository, snapshot, indices)?,
        None => client.create_snapshot(repository, snapshot, wait)?,
    };
    println!("{}", response.body);

    Ok(())
}
