pub mod app;
pub mod console;
pub mod error;
pub mod list;
pub mod person;
pub mod record;
pub mod seed;
pub mod song;
pub mod table;
pub mod validate;

pub use app::App;
pub use console::Console;
pub use error::{Error, RecordError, RemoveError, Result};
pub use list::{Keyed, LinkedList, Node};
pub use person::Person;
pub use record::Record;
pub use song::Song;
