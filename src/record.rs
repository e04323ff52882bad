use std::fmt::Display;
use std::io::{self, BufRead, Write};

use serde::de::DeserializeOwned;

use crate::console::Console;
use crate::list::Keyed;
use crate::table::Tabular;

/// Owned form of a record's natural key, what the menu reads from the console.
pub type OwnedKey<T> = <<T as Keyed>::Key as ToOwned>::Owned;

/// Everything the menu needs from a record type.
pub trait Record: Keyed + Tabular + Display + DeserializeOwned + Sized {
    /// Singular name, e.g. "song".
    const NOUN: &'static str;
    /// Plural name, e.g. "songs".
    const PLURAL: &'static str;
    /// Describes what `is_highlighted` keeps, e.g. "songs shorter than 5 minutes".
    const HIGHLIGHT: &'static str;

    /// Builds a record by prompting for every field.
    fn load<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Self>;

    /// Prompts for a natural key only.
    fn load_key<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<OwnedKey<Self>>;

    /// Interactive field editor, changes apply as soon as each field is entered.
    fn update<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()>;

    /// Filter behind the highlighted listing.
    fn is_highlighted(&self) -> bool;

    /// Built-in records loaded at startup, in insertion order.
    fn samples() -> Vec<Self>;
}
