pub mod category;
pub mod keyword;
pub mod paging;
pub mod role;
pub mod session;
pub mod topic;
pub mod user;

pub use category::Category;
pub use keyword::Keyword;
pub use paging::{ListParams, PageResponse};
pub use role::Role;
pub use session::{AuthUser, Credentials, LoginResponse, UserSession};
pub use topic::{ExploreTopic, SearchTopic};
pub use user::AdminUser;
