use std::fmt;
use std::io::{self, BufRead, Write};

use log::info;
use serde::Deserialize;

use crate::console::{Console, parse_field};
use crate::error::RecordError;
use crate::list::Keyed;
use crate::record::Record;
use crate::table::Tabular;
use crate::validate::{non_blank, positive};

/// Age from which a person shows up in the adults listing.
pub const ADULT_AGE: i32 = 18;

/// A person identified by a national ID number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "PersonRow")]
pub struct Person {
    id: i64,
    full_name: String,
    address: String,
    age: i32,
}

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: i64,
    full_name: String,
    address: String,
    age: i32,
}

impl TryFrom<PersonRow> for Person {
    type Error = RecordError;

    fn try_from(row: PersonRow) -> Result<Self, Self::Error> {
        Person::new(row.id, row.full_name, row.address, row.age)
    }
}

impl Person {
    pub fn new(
        id: i64,
        full_name: impl Into<String>,
        address: impl Into<String>,
        age: i32,
    ) -> Result<Self, RecordError> {
        Ok(Person {
            id: positive("id", id)?,
            full_name: non_blank("full name", full_name)?,
            address: non_blank("address", address)?,
            age: positive("age", age)?,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_id(&mut self, id: i64) -> Result<(), RecordError> {
        self.id = positive("id", id)?;
        Ok(())
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) -> Result<(), RecordError> {
        self.full_name = non_blank("full name", full_name)?;
        Ok(())
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), RecordError> {
        self.address = non_blank("address", address)?;
        Ok(())
    }

    pub fn set_age(&mut self, age: i32) -> Result<(), RecordError> {
        self.age = positive("age", age)?;
        Ok(())
    }

    fn prompt_id<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<i64> {
        console.prompt_valid("ID: ", |s| positive("id", parse_field("id", s)?))
    }

    fn prompt_full_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<String> {
        console.prompt_valid("Full name: ", |s| non_blank("full name", s))
    }

    fn prompt_address<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<String> {
        console.prompt_valid("Address: ", |s| non_blank("address", s))
    }

    fn prompt_age<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<i32> {
        console.prompt_valid("Age: ", |s| positive("age", parse_field("age", s)?))
    }
}

impl Keyed for Person {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.id
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}, {} years old, lives at {}",
            self.id, self.full_name, self.age, self.address
        )
    }
}

impl Tabular for Person {
    fn columns() -> &'static [&'static str] {
        &["ID", "Full name", "Address", "Age"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.full_name.clone(),
            self.address.clone(),
            self.age.to_string(),
        ]
    }
}

impl Record for Person {
    const NOUN: &'static str = "person";
    const PLURAL: &'static str = "people";
    const HIGHLIGHT: &'static str = "adults (18 or older)";

    fn load<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Self> {
        Ok(Person {
            id: Self::prompt_id(console)?,
            full_name: Self::prompt_full_name(console)?,
            address: Self::prompt_address(console)?,
            age: Self::prompt_age(console)?,
        })
    }

    fn load_key<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<i64> {
        Self::prompt_id(console)
    }

    /// Only the name and address can change; the ID is fixed once stored.
    fn update<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        loop {
            let out = console.output();
            writeln!(out, "Update person")?;
            writeln!(out, "1. Change full name")?;
            writeln!(out, "2. Change address")?;
            writeln!(out, "0. Confirm and exit")?;

            match console.prompt_number::<i64>("Select an option: ")? {
                1 => {
                    writeln!(console.output(), "Current full name: {}", self.full_name)?;
                    self.full_name = Self::prompt_full_name(console)?;
                }
                2 => {
                    writeln!(console.output(), "Current address: {}", self.address)?;
                    self.address = Self::prompt_address(console)?;
                }
                0 => {
                    if console.confirm("Confirm the changes?")? {
                        break;
                    }
                }
                _ => writeln!(console.output(), "Invalid option, try again.")?,
            }
        }

        info!("Updated person: {}", self);
        writeln!(console.output(), "Person updated!")
    }

    fn is_highlighted(&self) -> bool {
        self.age >= ADULT_AGE
    }

    fn samples() -> Vec<Self> {
        [
            (30_111_222, "Lucía Fernández", "Av. Siempre Viva 742", 34),
            (41_555_010, "Tomás Giménez", "Calle Falsa 123", 17),
            (12_345_678, "Marta Ruiz", "San Martín 1050", 68),
            (45_900_321, "Bruno Acosta", "Belgrano 77", 12),
            (27_808_404, "Carla Domínguez", "Mitre 2300, 4B", 45),
        ]
        .into_iter()
        .map(|(id, full_name, address, age)| Person {
            id,
            full_name: full_name.to_string(),
            address: address.to_string(),
            age,
        })
        .collect()
    }
}
