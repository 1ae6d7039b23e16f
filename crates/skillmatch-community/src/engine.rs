//! CommunityEngine: co-membership lookups, reclustering, insights.

use chrono::Utc;
use skillmatch_core::config::CommunityConfig;
use skillmatch_core::errors::{MatchError, MatchResult};
use skillmatch_core::models::{CommunityMember, InsightsReport};
use skillmatch_core::traits::{ICommunityStore, IUserDirectory, IVectorStore};
use tracing::{debug, info};

use crate::clustering;
use crate::insights;

pub struct CommunityEngine<'a> {
    directory: &'a dyn IUserDirectory,
    communities: &'a dyn ICommunityStore,
    config: CommunityConfig,
}

impl<'a> CommunityEngine<'a> {
    pub fn new(
        directory: &'a dyn IUserDirectory,
        communities: &'a dyn ICommunityStore,
        config: CommunityConfig,
    ) -> Self {
        Self {
            directory,
            communities,
            config,
        }
    }

    /// Everyone sharing `user_id`'s community, the user included.
    ///
    /// A user without an assignment (created since the last clustering)
    /// is reported as a community of one.
    pub fn members(&self, user_id: i64) -> MatchResult<Vec<CommunityMember>> {
        let user = self
            .directory
            .get_user(user_id)?
            .ok_or(MatchError::UnknownUser { id: user_id })?;

        match self.communities.community_of(user_id)? {
            Some(community_id) => {
                let members = self.communities.community_members(community_id)?;
                debug!(user_id, community_id, members = members.len(), "community lookup");
                Ok(members)
            }
            None => Ok(vec![CommunityMember {
                user_id: user.id,
                name: user.name,
            }]),
        }
    }

    /// Cluster every indexed vector and persist the labels.
    ///
    /// Returns the number of communities written.
    pub fn recluster(&self, store: &dyn IVectorStore) -> MatchResult<usize> {
        let mut user_ids = Vec::with_capacity(store.len());
        let mut embeddings = Vec::with_capacity(store.len());
        for position in 0..store.len() {
            if let (Some(id), Some(vector)) = (store.user_id_at(position), store.vector(position)) {
                user_ids.push(id);
                embeddings.push(vector.to_vec());
            }
        }

        let labels = clustering::assign_labels(&embeddings, self.config.min_cluster_size);
        let assignments: Vec<(i64, i64)> = user_ids.into_iter().zip(labels.iter().copied()).collect();
        self.communities.replace_communities(&assignments)?;

        let count = clustering::community_count(&labels);
        info!(users = assignments.len(), communities = count, "communities reassigned");
        Ok(count)
    }

    /// Directory-wide insights as of today.
    pub fn insights(&self) -> MatchResult<InsightsReport> {
        let users = self.directory.list_users()?;
        Ok(insights::compute_insights(
            &users,
            Utc::now().date_naive(),
            &self.config,
        ))
    }
}
