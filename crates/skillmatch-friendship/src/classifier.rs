//! Logistic regression over the four pair features.

use skillmatch_core::config::FriendshipConfig;
use skillmatch_core::models::FriendshipFeatures;
use skillmatch_core::traits::IFriendshipClassifier;

/// `sigmoid(intercept + w · x) >= threshold` means a strong collaboration.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticClassifier {
    intercept: f64,
    coefficients: [f64; 4],
    threshold: f64,
}

impl LogisticClassifier {
    pub fn new(intercept: f64, coefficients: [f64; 4], threshold: f64) -> Self {
        Self {
            intercept,
            coefficients,
            threshold,
        }
    }

    pub fn from_config(config: &FriendshipConfig) -> Self {
        Self::new(config.intercept, config.coefficients, config.threshold)
    }
}

impl Default for LogisticClassifier {
    fn default() -> Self {
        Self::from_config(&FriendshipConfig::default())
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl IFriendshipClassifier for LogisticClassifier {
    fn predict_proba(&self, features: &FriendshipFeatures) -> f64 {
        let z = features
            .as_array()
            .iter()
            .zip(self.coefficients.iter())
            .fold(self.intercept, |acc, (x, w)| acc + x * w);
        sigmoid(z)
    }

    fn predict(&self, features: &FriendshipFeatures) -> bool {
        self.predict_proba(features) >= self.threshold
    }
}
