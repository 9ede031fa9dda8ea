//! Pages
//!
//! One component per route. Each page is an independent mount → fetch →
//! render view.

mod about;
mod admin;
mod create_appeal;
mod dashboard;
mod home;
mod login;
mod not_found;
mod register;

pub use about::AboutPage;
pub use admin::AdminPage;
pub use create_appeal::CreateAppealPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
