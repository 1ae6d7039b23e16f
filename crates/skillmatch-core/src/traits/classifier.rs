use crate::models::FriendshipFeatures;

/// Binary collaboration classifier.
pub trait IFriendshipClassifier: Send + Sync {
    /// Probability that the pair collaborates strongly.
    fn predict_proba(&self, features: &FriendshipFeatures) -> f64;

    /// Whether the pair is predicted to collaborate strongly.
    fn predict(&self, features: &FriendshipFeatures) -> bool;
}
