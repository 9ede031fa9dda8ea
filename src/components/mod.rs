//! UI Components
//!
//! Reusable Leptos components.

mod appeal_card;
mod button;
mod error_banner;
mod protected;
mod site_header;

pub use appeal_card::AppealCard;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use error_banner::{ErrorBanner, FieldError};
pub use protected::Protected;
pub use site_header::SiteHeader;
