pub mod assistant;
pub mod catalog;
pub mod domain;
pub mod filter;
pub mod navigation;
pub mod notifications;
pub mod ports;
pub mod session;
pub mod user_state;

pub use assistant::{ChatMessage, ChatRole, Conversation};
pub use catalog::CatalogStore;
pub use domain::{CrowdLevel, FilterCriteria, NoiseLevel, Review, Spot, SpotType};
pub use filter::filter_spots;
pub use navigation::{NavigationState, View};
pub use notifications::{Notification, NotificationQueue, Severity};
pub use ports::{PortError, PortResult, RecommendationService};
pub use session::StudySession;
pub use user_state::{Toggle, UserStateStore};
