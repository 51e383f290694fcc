pub mod comments;
pub mod gallery;
pub mod numerals;
pub mod products;
pub mod rate_limits;
pub mod toasts;
pub mod uploads;
