use std::borrow::Borrow;
use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::console::Console;
use crate::error::RemoveError;
use crate::list::{Keyed, LinkedList};
use crate::record::Record;
use crate::table::{self, DEFAULT_WIDTH};

/// Numbered console menu over one list of records.
pub struct App<T, R, W> {
    list: LinkedList<T>,
    console: Console<R, W>,
    table_width: usize,
}

impl<T: Record, R: BufRead, W: Write> App<T, R, W> {
    pub fn new(list: LinkedList<T>, console: Console<R, W>) -> Self {
        App {
            list,
            console,
            table_width: DEFAULT_WIDTH,
        }
    }

    pub fn with_table_width(mut self, table_width: usize) -> Self {
        self.table_width = table_width;
        self
    }

    pub fn list(&self) -> &LinkedList<T> {
        &self.list
    }

    pub fn into_parts(self) -> (LinkedList<T>, Console<R, W>) {
        (self.list, self.console)
    }

    /// Runs the menu until the user picks 0 or the input runs dry.
    pub fn run(&mut self) -> io::Result<()> {
        match self.menu() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("Console input closed, leaving the menu");
                Ok(())
            }
            other => other,
        }
    }

    fn menu(&mut self) -> io::Result<()> {
        loop {
            self.show_options()?;

            let line = self.console.prompt("Select an option: ")?;
            let Ok(choice) = line.trim().parse::<i64>() else {
                writeln!(self.console.output(), "Invalid option.")?;
                continue;
            };
            debug!("Menu choice {}", choice);

            match choice {
                1 => self.add()?,
                2 => self.print_all()?,
                3 => self.print_table()?,
                4 => self.update()?,
                5 => self.remove()?,
                6 => self.print_highlighted()?,
                0 => break,
                _ => writeln!(self.console.output(), "Invalid option.")?,
            }
        }

        writeln!(self.console.output(), "Bye!")
    }

    fn show_options(&mut self) -> io::Result<()> {
        let out = self.console.output();
        writeln!(out, "*** {} list ***", titlecase(T::NOUN))?;
        writeln!(out, "1. Add {}", T::NOUN)?;
        writeln!(out, "2. List {}", T::PLURAL)?;
        writeln!(out, "3. List {} (table)", T::PLURAL)?;
        writeln!(out, "4. Update {}", T::NOUN)?;
        writeln!(out, "5. Remove {}", T::NOUN)?;
        writeln!(out, "6. List {}", T::HIGHLIGHT)?;
        writeln!(out, "0. Exit")
    }

    fn add(&mut self) -> io::Result<()> {
        loop {
            let record = T::load(&mut self.console)?;
            info!("Adding {}: {}", T::NOUN, record);
            self.list.insert_front(record);

            if !self.console.confirm(&format!("Add another {}?", T::NOUN))? {
                return Ok(());
            }
        }
    }

    fn print_all(&mut self) -> io::Result<()> {
        if self.list.is_empty() {
            return writeln!(self.console.output(), "There are no {} yet.", T::PLURAL);
        }
        self.list.display(self.console.output())
    }

    fn print_table(&mut self) -> io::Result<()> {
        table::render(self.console.output(), &self.list, self.table_width)
    }

    fn update(&mut self) -> io::Result<()> {
        let key = T::load_key(&mut self.console)?;
        let key: &<T as Keyed>::Key = key.borrow();

        match self.list.search_mut(key) {
            Some(node) => node.record_mut().update(&mut self.console),
            None => {
                debug!("Update {:?}: not found", key);
                writeln!(
                    self.console.output(),
                    "There is no {} with key '{}' in the list.",
                    T::NOUN,
                    key
                )
            }
        }
    }

    fn remove(&mut self) -> io::Result<()> {
        loop {
            let key = T::load_key(&mut self.console)?;
            let key: &<T as Keyed>::Key = key.borrow();

            match self.list.remove(key) {
                Ok(node) => {
                    info!("Removed {}: {}", T::NOUN, node.record());
                    let out = self.console.output();
                    writeln!(out, "The {}:", T::NOUN)?;
                    table::render(&mut *out, [node.record()], self.table_width)?;
                    writeln!(out, "was removed from the list.")?;
                }
                Err(RemoveError::Empty) => {
                    writeln!(self.console.output(), "The list is empty, nothing to remove.")?;
                }
                Err(RemoveError::NotFound) => {
                    writeln!(
                        self.console.output(),
                        "There is no {} with key '{}' in the list.",
                        T::NOUN,
                        key
                    )?;
                }
            }

            if !self.console.confirm(&format!("Remove another {}?", T::NOUN))? {
                return Ok(());
            }
        }
    }

    fn print_highlighted(&mut self) -> io::Result<()> {
        let out = self.console.output();
        writeln!(out, "{}:", titlecase(T::HIGHLIGHT))?;

        let mut current = self.list.head();
        while let Some(node) = current {
            if node.record().is_highlighted() {
                writeln!(out, "{}", node.record())?;
            }
            current = node.next();
        }
        Ok(())
    }
}

fn titlecase(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}
