mod common;
mod de;
mod host;
mod payload;
mod signature;
mod tag;
mod url;

pub use common::*;
pub use host::*;
pub use payload::*;
pub use signature::*;
pub use tag::*;
pub use self::url::*;
