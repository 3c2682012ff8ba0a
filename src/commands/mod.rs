pub mod create;
pub mod list;
pub mod restore;

pub use create::create;
pub use list::list;
pub use restore::restore;
