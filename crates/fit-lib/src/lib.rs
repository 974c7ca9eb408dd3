pub mod dispatch;
pub mod error;
pub mod io;
pub mod report;
pub mod workout;

pub use dispatch::*;
pub use error::*;
pub use report::*;
pub use workout::*;
