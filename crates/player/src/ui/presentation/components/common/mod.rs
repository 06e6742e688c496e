//! Common reusable UI primitives.

mod alert;
pub use alert::ErrorAlert;

mod card;
pub use card::Card;

mod skeleton;
pub use skeleton::Skeleton;

mod badge;
pub use badge::Badge;
