use log::info;

use crate::client::ClusterClient;
use crate::error::{Result, SnapctlError};
use crate::prompt::Confirmation;

/// Restore a snapshot into the cluster, whole or index by index.
///
/// The restore target has to repeat the snapshot name so a stale flag
/// combination cannot replay the wrong snapshot. Nothing is sent until
/// that check passes, and the destructive call itself waits for the
/// operator's confirmation.
pub fn restore(
    client: &ClusterClient,
    repository: &str,
    snapshot: Option<&str>,
    target: &str,
    indices: Option<&str>,
    confirm: &mut dyn Confirmation,
) -> Result<()> {
    let snapshot = snapshot.ok_or(SnapctlError::MissingArgument("snapshot"))?;

    if target != snapshot {
        return Err(SnapctlError::SnapshotMismatch {
            requested: target.to_string(),
            expected: snapshot.to_string(),
        });
    }

    info!(
        "Fetching metadata for snapshot {} in repository {}",
        snapshot, repository
    );
    let lookup = client.snapshots(repository, Some(snapshot))?;
    if lookup.indicates_error() {
        return Err(SnapctlError::SnapshotNotFound {
            repository: repository.to_string(),
            snapshot: snapshot.to_string(),
        });
    }
    println!("{}", lookup.body);

    let question = format!(
        "Restore snapshot {} from repository {}?",
        snapshot, repository
    );
    if !confirm.confirm(&question)? {
        return Err(SnapctlError::Aborted);
    }

    info!(
        "Restoring snapshot {} from repository {}",
        snapshot, repository
    );
    let response = match indices {
        Some(indices) => client.restore_snapshot_selective(repository, snapshot, indices)?,
        None => client.restore_snapshot(repository, snapshot)?,
    };
    println!("{}", response.body);

    Ok(())
}
