use log::info;

use crate::client::ClusterClient;
use crate::error::Result;

/// Print what the repository holds: one snapshot if a name was given,
/// otherwise every snapshot in it.
pub fn list(client: &ClusterClient, repository: &str, snapshot: Option<&str>) -> Result<()> {
    info!(
        "Listing {} in repository {}",
        snapshot.unwrap_or("all snapshots"),
        repository
    );

    let response = client.snapshots(repository, snapshot)?;
    println!("{}", response.body);

    Ok(())
}
