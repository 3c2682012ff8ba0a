use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Serialize;

use crate::error::Result;

/// Wildcard snapshot name the API resolves to every snapshot in a repository.
const ALL_SNAPSHOTS: &str = "_all";

/// Thin blocking client for the cluster's snapshot REST API.
///
/// Responses are returned raw so callers can relay them to the console
/// unchanged. Snapshot operations can run for a long time, so no request
/// timeout is set.
pub struct ClusterClient {
    http: Client,
    base_url: String,
}

/// Status line plus the untouched response body.
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// The API reports missing repositories and snapshots inside the body,
    /// not through the status line. Probe and lookup flows key off this.
    pub fn indicates_error(&self) -> bool {
        self.body.contains("error")
    }
}

#[derive(Serialize)]
struct RepositorySpec<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    settings: RepositorySettings<'a>,
}

#[derive(Serialize)]
struct RepositorySettings<'a> {
    compress: bool,
    location: &'a str,
}

/// Body for selective snapshot and restore calls. The API accepts
/// `ignore_unavailable` as a quoted literal and that form is kept.
#[derive(Serialize)]
struct SnapshotTargets<'a> {
    indices: &'a str,
    ignore_unavailable: &'static str,
    include_global_state: bool,
}

impl<'a> SnapshotTargets<'a> {
    fn new(indices: &'a str) -> Self {
        Self {
            indices,
            ignore_unavailable: "true",
            include_global_state: false,
        }
    }
}

impl ClusterClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let http = Client::builder().timeout(None).build()?;
        Ok(Self {
            http,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /_snapshot/{repository}/{snapshot}`, or all snapshots when no
    /// name is given.
    pub fn snapshots(&self, repository: &str, snapshot: Option<&str>) -> Result<ApiResponse> {
        let url = self.snapshot_url(repository, snapshot.unwrap_or(ALL_SNAPSHOTS));
        debug!("GET {}", url);
        finish(self.http.get(&url).send()?)
    }

    /// `GET /_snapshot/{repository}`. A missing repository answers with an
    /// error body, not a transport failure.
    pub fn repository(&self, repository: &str) -> Result<ApiResponse> {
        let url = self.repository_url(repository);
        debug!("GET {}", url);
        finish(self.http.get(&url).send()?)
    }

    /// Register a shared-filesystem repository backed by `location`.
    pub fn register_repository(&self, repository: &str, location: &str) -> Result<ApiResponse> {
        let url = self.repository_url(repository);
        let spec = RepositorySpec {
            kind: "fs",
            settings: RepositorySettings {
                compress: true,
                location,
            },
        };
        debug!("PUT {}", url);
        finish(self.http.put(&url).json(&spec).send()?)
    }

    /// Snapshot everything in the cluster. `wait` is handed to the API
    /// verbatim as `wait_for_completion`.
    pub fn create_snapshot(&self, repository: &str, snapshot: &str, wait: &str) -> Result<ApiResponse> {
        let url = self.snapshot_url(repository, snapshot);
        debug!("PUT {}?wait_for_completion={}", url, wait);
        finish(
            self.http
                .put(&url)
                .query(&[("wait_for_completion", wait)])
                .send()?,
        )
    }

    /// Snapshot only the named indices.
    pub fn create_snapshot_selective(
        &self,
        repository: &str,
        snapshot: &str,
        indices: &str,
    ) -> Result<ApiResponse> {
        let url = self.snapshot_url(repository, snapshot);
        debug!("PUT {} covering {}", url, indices);
        finish(self.http.put(&url).json(&SnapshotTargets::new(indices)).send()?)
    }

    /// Restore a whole snapshot.
    pub fn restore_snapshot(&self, repository: &str, snapshot: &str) -> Result<ApiResponse> {
        let url = format!("{}/_restore", self.snapshot_url(repository, snapshot));
        debug!("GET {}", url);
        finish(self.http.get(&url).send()?)
    }

    /// Restore only the named indices out of a snapshot.
    pub fn restore_snapshot_selective(
        &self,
        repository: &str,
        snapshot: &str,
        indices: &str,
    ) -> Result<ApiResponse> {
        let url = format!("{}/_restore", self.snapshot_url(repository, snapshot));
        debug!("PUT {} covering {}", url, indices);
        finish(self.http.put(&url).json(&SnapshotTargets::new(indices)).send()?)
    }

    fn repository_url(&self, repository: &str) -> String {
        format!("{}/_snapshot/{}", self.base_url, repository)
    }

    fn snapshot_url(&self, repository: &str, snapshot: &str) -> String {
        format!("{}/_snapshot/{}/{}", self.base_url, repository, snapshot)
    }
}

fn finish(response: Response) -> Result<ApiResponse> {
    let status = response.status();
    let body = response.text()?;
    debug!("Cluster answered {} ({} bytes)", status, body.len());
    Ok(ApiResponse { status, body })
}
