pub mod optional;
pub use optional::Optional;

pub mod falsy;
pub use falsy::Falsy;

pub mod nullable;
pub use nullable::Nullable;

pub mod convert;
pub use convert::OptionExt;
