pub mod favorite;
pub mod ids;
pub mod recipe;
pub mod report;
pub mod user;

pub use favorite::Favorite;
pub use ids::{EntityId, IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use recipe::{NewRecipe, Recipe};
pub use report::Report;
pub use user::{Profile, User};
