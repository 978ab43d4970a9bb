mod date;
mod trip;
mod user;

pub use date::*;
pub use trip::*;
pub use user::*;

/// Display and parse pattern for every date the journal handles.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
