pub mod error;
pub mod optional;
pub mod nullable;
pub mod functions;
pub mod comparison;
pub mod test_framework;


pub use error::*;
pub use optional::*;
pub use nullable::Nullable;
pub use functions::*;
