pub mod error;
pub mod format_version;
pub mod header;
pub mod position;
pub mod text;

pub use error::*;
pub use format_version::*;
pub use header::*;
pub use position::*;
pub use text::*;
