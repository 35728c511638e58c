//! Page state and the two loaders that fill it.
//!
//! Both requests are started back-to-back and may finish in either order.
//! Each loader posts its result to the owning [`Portfolio`] over a channel,
//! and the owner applies results one at a time as they arrive. A failed
//! load is logged and otherwise ignored, so the page keeps whatever it
//! already had (zeros and an empty project list on a fresh run).

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::github::{GithubClient, Profile, Repository};
use crate::stats::{ProfileStats, StatsUpdate};

/// Completion of one loader.
#[derive(Debug)]
pub enum Loaded {
    Profile(Result<Profile>),
    Repositories(Result<Vec<Repository>>),
}

#[derive(Debug, Default)]
pub struct Portfolio {
    pub stats: ProfileStats,
    pub repositories: Vec<Repository>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one loader result into the state.
    pub fn apply(&mut self, event: Loaded) {
        match event {
            Loaded::Profile(Ok(profile)) => {
                info!(
                    followers = profile.followers,
                    repos = profile.public_repos,
                    "profile loaded"
                );
                self.stats.merge(StatsUpdate::from_profile(&profile));
            }
            Loaded::Profile(Err(e)) => {
                warn!("profile unavailable, keeping previous counts: {e:#}");
            }
            Loaded::Repositories(Ok(repos)) => {
                let update = StatsUpdate::from_repositories(&repos);
                info!(
                    count = repos.len(),
                    stars = ?update.stars,
                    forks = ?update.forks,
                    "repositories loaded"
                );
                self.stats.merge(update);
                self.repositories = repos;
            }
            Loaded::Repositories(Err(e)) => {
                warn!("repositories unavailable, keeping previous list: {e:#}");
            }
        }
    }

    /// Run both loaders for `username` and return the merged state.
    /// Never fails; see the module docs.
    pub async fn load(client: &GithubClient, username: &str) -> Self {
        let (tx, mut rx) = mpsc::channel::<Loaded>(2);

        {
            let client = client.clone();
            let username = username.to_string();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.fetch_profile(&username).await;
                // Receiver gone means the run was torn down; drop the result.
                let _ = tx.send(Loaded::Profile(result)).await;
            });
        }

        {
            let client = client.clone();
            let username = username.to_string();
            tokio::spawn(async move {
                let result = client.fetch_repositories(&username).await;
                let _ = tx.send(Loaded::Repositories(result)).await;
            });
        }

        let mut portfolio = Self::new();
        while let Some(event) = rx.recv().await {
            debug!("loader finished");
            portfolio.apply(event);
        }
        portfolio
    }
}
