use std::cmp::Ordering;
use std::fmt;
use std::io::{self, BufRead, Write};

use log::info;
use serde::Deserialize;

use crate::console::{Console, parse_field};
use crate::error::RecordError;
use crate::list::Keyed;
use crate::record::Record;
use crate::table::Tabular;
use crate::validate::{non_blank, positive_finite};

/// Songs strictly shorter than this many minutes are highlighted.
pub const SHORT_SONG_MINUTES: f32 = 5.0;

/// A song in the playlist. The title is the natural key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "SongRow")]
pub struct Song {
    title: String,
    artist: String,
    /// Minutes.
    duration: f32,
    genre: String,
}

/// Raw CSV row, validated into a [`Song`].
#[derive(Debug, Deserialize)]
struct SongRow {
    title: String,
    artist: String,
    duration: f32,
    genre: String,
}

impl TryFrom<SongRow> for Song {
    type Error = RecordError;

    fn try_from(row: SongRow) -> Result<Self, Self::Error> {
        Song::new(row.title, row.artist, row.duration, row.genre)
    }
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: f32,
        genre: impl Into<String>,
    ) -> Result<Self, RecordError> {
        Ok(Song {
            title: non_blank("title", title)?,
            artist: non_blank("artist", artist)?,
            duration: positive_finite("duration", duration)?,
            genre: non_blank("genre", genre)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), RecordError> {
        self.title = non_blank("title", title)?;
        Ok(())
    }

    pub fn set_artist(&mut self, artist: impl Into<String>) -> Result<(), RecordError> {
        self.artist = non_blank("artist", artist)?;
        Ok(())
    }

    pub fn set_duration(&mut self, duration: f32) -> Result<(), RecordError> {
        self.duration = positive_finite("duration", duration)?;
        Ok(())
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) -> Result<(), RecordError> {
        self.genre = non_blank("genre", genre)?;
        Ok(())
    }

    /// Lexicographic order on titles.
    pub fn compare_title(&self, other: &Song) -> Ordering {
        self.title.cmp(&other.title)
    }

    fn prompt_title<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<String> {
        console.prompt_valid("Title: ", |s| non_blank("title", s))
    }

    fn prompt_artist<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<String> {
        console.prompt_valid("Artist: ", |s| non_blank("artist", s))
    }

    fn prompt_duration<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<f32> {
        console.prompt_valid("Duration (minutes): ", |s| {
            positive_finite("duration", parse_field("duration", s)?)
        })
    }

    fn prompt_genre<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<String> {
        console.prompt_valid("Genre: ", |s| non_blank("genre", s))
    }
}

impl Keyed for Song {
    type Key = str;

    fn key(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({:.2} min, {})",
            self.artist, self.title, self.duration, self.genre
        )
    }
}

impl Tabular for Song {
    fn columns() -> &'static [&'static str] {
        &["Title", "Artist", "Duration", "Genre"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.artist.clone(),
            format!("{:.2}", self.duration),
            self.genre.clone(),
        ]
    }
}

impl Record for Song {
    const NOUN: &'static str = "song";
    const PLURAL: &'static str = "songs";
    const HIGHLIGHT: &'static str = "songs shorter than 5 minutes";

    fn load<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Self> {
        Ok(Song {
            title: Self::prompt_title(console)?,
            artist: Self::prompt_artist(console)?,
            duration: Self::prompt_duration(console)?,
            genre: Self::prompt_genre(console)?,
        })
    }

    fn load_key<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<String> {
        Self::prompt_title(console)
    }

    /// The title stays editable even though it is the lookup key.
    fn update<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        loop {
            let out = console.output();
            writeln!(out, "Update song")?;
            writeln!(out, "1. Change title")?;
            writeln!(out, "2. Change artist")?;
            writeln!(out, "3. Change genre")?;
            writeln!(out, "0. Confirm and exit")?;

            match console.prompt_number::<i64>("Select an option: ")? {
                1 => {
                    writeln!(console.output(), "Current title: {}", self.title)?;
                    self.title = Self::prompt_title(console)?;
                }
                2 => {
                    writeln!(console.output(), "Current artist: {}", self.artist)?;
                    self.artist = Self::prompt_artist(console)?;
                }
                3 => {
                    writeln!(console.output(), "Current genre: {}", self.genre)?;
                    self.genre = Self::prompt_genre(console)?;
                }
                0 => {
                    if console.confirm("Confirm the changes?")? {
                        break;
                    }
                }
                _ => writeln!(console.output(), "Invalid option, try again.")?,
            }
        }

        info!("Updated song: {}", self);
        writeln!(console.output(), "Song updated!")
    }

    fn is_highlighted(&self) -> bool {
        self.duration < SHORT_SONG_MINUTES
    }

    fn samples() -> Vec<Self> {
        [
            ("Mostly Clear Skies", "True Lust", 2.47, "Rock"),
            ("War Inside My Head", "Suicidal Tendencies", 4.57, "Thrash"),
            ("Flor de lino", "Horacio Molina", 3.33, "Vals"),
            ("Stargazer", "Rainbow", 8.27, "Neo-Classical Rock"),
            ("Bohemian Rhapsody", "Queen", 5.55, "Rock"),
            ("Stairway to Heaven", "Led Zeppelin", 8.02, "Rock"),
            ("Toccata and Fugue", "J.S. Bach", 5.01, "Baroque"),
        ]
        .into_iter()
        .map(|(title, artist, duration, genre)| Song {
            title: title.to_string(),
            artist: artist.to_string(),
            duration,
            genre: genre.to_string(),
        })
        .collect()
    }
}
