//! Interactive terminal browser runtime.

mod runtime;
pub mod session;
mod terminal;

pub use runtime::run;
pub use session::Session;
