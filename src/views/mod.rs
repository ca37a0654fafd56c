pub mod access_denied;
pub mod categories_view;
pub mod dashboard_view;
pub mod explore_topics_view;
pub mod keywords_view;
pub mod login_view;
pub mod search_topics_view;
pub mod shared;
pub mod users_view;

pub use access_denied::AccessDeniedView;
pub use categories_view::CategoriesView;
pub use dashboard_view::DashboardView;
pub use explore_topics_view::ExploreTopicsView;
pub use keywords_view::KeywordsView;
pub use login_view::LoginView;
pub use search_topics_view::SearchTopicsView;
pub use shared::Header;
pub use users_view::UsersView;
