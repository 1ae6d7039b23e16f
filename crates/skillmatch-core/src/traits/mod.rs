pub mod classifier;
pub mod community_store;
pub mod directory;
pub mod embedding;
pub mod vector_store;

pub use classifier::IFriendshipClassifier;
pub use community_store::ICommunityStore;
pub use directory::IUserDirectory;
pub use embedding::IEmbeddingProvider;
pub use vector_store::{IVectorStore, Neighbors};
