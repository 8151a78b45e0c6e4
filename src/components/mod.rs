//! UI Components
//!
//! Leptos rendering adapters over the store and the pure view functions.

mod auth_field;
mod confirm_modal;
mod dashboard;
mod header;
mod landing;
mod loading_screen;
mod login_page;
mod register_page;
mod sidebar;
mod task_item;
mod task_list;
mod task_modal;
mod toast;

pub use auth_field::AuthField;
pub use confirm_modal::ConfirmModal;
pub use dashboard::Dashboard;
pub use header::Header;
pub use landing::LandingPage;
pub use loading_screen::LoadingScreen;
pub use login_page::LoginPage;
pub use register_page::RegisterPage;
pub use sidebar::Sidebar;
pub use task_item::{RecentTaskRow, TaskRow};
pub use task_list::{EmptyState, TaskList};
pub use task_modal::TaskModal;
pub use toast::ToastContainer;
