// Re-export all model types
pub use self::docs::*;
pub use self::errors::*;
pub use self::franchise::*;
pub use self::menu::*;
pub use self::order::*;
pub use self::user::*;

mod docs;
mod errors;
mod franchise;
mod menu;
mod order;
mod user;
