pub mod export;
pub mod install;
pub mod runtime;
pub mod session;
pub mod util;

pub use export::*;
pub use install::*;
pub use runtime::*;
pub use session::*;
pub use util::*;
