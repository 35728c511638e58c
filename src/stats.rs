use crate::github::{Profile, Repository};

/// Counters shown in the quick-stats grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileStats {
    pub followers: u64,
    pub stars: u64,
    pub forks: u64,
    pub repos: u64,
}

/// A partial update. `None` fields leave the current value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsUpdate {
    pub followers: Option<u64>,
    pub stars: Option<u64>,
    pub forks: Option<u64>,
    pub repos: Option<u64>,
}

impl StatsUpdate {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            followers: Some(profile.followers),
            repos: Some(profile.public_repos),
            ..Self::default()
        }
    }

    /// Star and fork totals across `repos`.
    pub fn from_repositories(repos: &[Repository]) -> Self {
        let (stars, forks) = repos.iter().fold((0u64, 0u64), |(stars, forks), r| {
            (
                stars.saturating_add(r.stargazers_count),
                forks.saturating_add(r.forks_count),
            )
        });

        Self {
            stars: Some(stars),
            forks: Some(forks),
            ..Self::default()
        }
    }
}

impl ProfileStats {
    pub fn merge(&mut self, update: StatsUpdate) {
        if let Some(v) = update.followers {
            self.followers = v;
        }
        if let Some(v) = update.stars {
            self.stars = v;
        }
        if let Some(v) = update.forks {
            self.forks = v;
        }
        if let Some(v) = update.repos {
            self.repos = v;
        }
    }
}
