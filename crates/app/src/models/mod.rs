//! Domain row types mirrored from the canteen data service,
//! plus session-scoped view models.

pub mod menu;
pub mod order;
pub mod profile;
pub mod session;

pub use menu::{MenuItem, MenuItemChanges, NewMenuItem};
pub use order::{MealOrder, NewOrder, OrderWithItem, OrderedItem};
pub use profile::{Profile, ProfileChanges};
pub use session::{CurrentUser, session_keys};
