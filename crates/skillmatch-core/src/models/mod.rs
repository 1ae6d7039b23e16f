pub mod age;
pub mod community;
pub mod friendship;
pub mod health_report;
pub mod insights;
pub mod search_result;
pub mod user;

pub use age::Age;
pub use community::CommunityMember;
pub use friendship::{FriendshipFeatures, FriendshipPrediction};
pub use health_report::{HealthReport, HealthStatus};
pub use insights::{CityCount, InsightsReport, InterestCount};
pub use search_result::Match;
pub use user::{NewUser, UserRecord};
