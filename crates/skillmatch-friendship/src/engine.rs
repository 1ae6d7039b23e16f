//! FriendshipEngine: resolves both users and runs the classifier.

use chrono::Utc;
use skillmatch_core::errors::{MatchError, MatchResult};
use skillmatch_core::models::{FriendshipFeatures, FriendshipPrediction, UserRecord};
use skillmatch_core::traits::{IFriendshipClassifier, IUserDirectory};
use tracing::debug;

use crate::features;

pub struct FriendshipEngine<'a> {
    directory: &'a dyn IUserDirectory,
    classifier: &'a dyn IFriendshipClassifier,
}

impl<'a> FriendshipEngine<'a> {
    pub fn new(
        directory: &'a dyn IUserDirectory,
        classifier: &'a dyn IFriendshipClassifier,
    ) -> Self {
        Self {
            directory,
            classifier,
        }
    }

    fn pair(&self, a: i64, b: i64) -> MatchResult<(UserRecord, UserRecord)> {
        let fetch = |id: i64| -> MatchResult<UserRecord> {
            if id < 0 {
                return Err(MatchError::UnknownUser { id });
            }
            self.directory
                .get_user(id)?
                .ok_or(MatchError::UnknownUser { id })
        };
        Ok((fetch(a)?, fetch(b)?))
    }

    pub fn features(&self, a: i64, b: i64) -> MatchResult<FriendshipFeatures> {
        let (ua, ub) = self.pair(a, b)?;
        Ok(features::compute_features(&ua, &ub, Utc::now().date_naive()))
    }

    /// Classify a pair. Unknown ids give `InvalidUsers` rather than an error.
    pub fn predict(&self, a: i64, b: i64) -> MatchResult<FriendshipPrediction> {
        let features = match self.features(a, b) {
            Ok(f) => f,
            Err(MatchError::UnknownUser { id }) => {
                debug!(user_a = a, user_b = b, unknown = id, "friendship for unknown user");
                return Ok(FriendshipPrediction::InvalidUsers);
            }
            Err(e) => return Err(e),
        };

        let probability = self.classifier.predict_proba(&features);
        let strong = self.classifier.predict(&features);
        debug!(
            user_a = a,
            user_b = b,
            jaccard = features.jaccard,
            probability,
            strong,
            "friendship predicted"
        );
        Ok(if strong {
            FriendshipPrediction::Strong
        } else {
            FriendshipPrediction::Weak
        })
    }

    pub fn mutual_interests(&self, a: i64, b: i64) -> MatchResult<Vec<String>> {
        let (ua, ub) = self.pair(a, b)?;
        Ok(features::mutual_interests(&ua, &ub))
    }
}
