pub mod element;
pub mod id;
pub mod process;
pub mod validate;

pub use element::*;
pub use id::*;
pub use process::*;
pub use validate::*;
