//! Console host: command parsing, terminal rendering and the session loop

pub mod clock;
pub mod command;
pub mod session;
pub mod surface;

pub use clock::WallClock;
pub use command::{CommandParseError, ConsoleCommand};
pub use session::{ConsoleSession, Flow};
pub use surface::ConsoleSurface;
