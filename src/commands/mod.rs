pub mod add;
pub mod explore;
pub mod remove;
pub mod scan;
pub mod status;

pub use add::*;
pub use explore::*;
pub use remove::*;
pub use scan::*;
pub use status::*;
