use std::io::{self, Write};

/// Console width the table is squeezed into unless told otherwise.
pub const DEFAULT_WIDTH: usize = 120;

const SEPARATOR: &str = " | ";
const ELLIPSIS: &str = "...";

/// A record that can be printed as a table row.
pub trait Tabular {
    fn columns() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Column widths for a set of rows, capped so one line fits in `max_width`.
/// Narrow columns keep their natural width; the room they leave goes to the
/// wider ones, which share what is left evenly.
pub fn column_widths(headers: &[&str], rows: &[Vec<String>], max_width: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separators = SEPARATOR.len() * headers.len().saturating_sub(1);
    let total = widths.iter().sum::<usize>() + separators;
    if total <= max_width || widths.is_empty() {
        return widths;
    }

    let mut by_width: Vec<usize> = (0..widths.len()).collect();
    by_width.sort_by_key(|&i| widths[i]);

    let mut room = max_width.saturating_sub(separators);
    let columns = by_width.len();
    for (done, &i) in by_width.iter().enumerate() {
        let share = (room / (columns - done)).max(ELLIPSIS.len() + 1);
        widths[i] = widths[i].min(share);
        room = room.saturating_sub(widths[i]);
    }
    widths
}

/// Pads `cell` to `width`, cutting it short with an ellipsis when too long.
pub fn fit(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    if len <= width {
        return format!("{:<width$}", cell, width = width);
    }
    if width <= ELLIPSIS.len() {
        return cell.chars().take(width).collect();
    }
    let mut cut: String = cell.chars().take(width - ELLIPSIS.len()).collect();
    cut.push_str(ELLIPSIS);
    cut
}

fn write_row<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| fit(cell, *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    writeln!(out, "{}", line.trim_end())
}

/// Writes a header, a rule and one line per record.
pub fn render<'a, T, I, W>(out: &mut W, records: I, max_width: usize) -> io::Result<()>
where
    T: Tabular + 'a,
    I: IntoIterator<Item = &'a T>,
    W: Write,
{
    let headers = T::columns();
    let rows: Vec<Vec<String>> = records.into_iter().map(|record| record.cells()).collect();
    let widths = column_widths(headers, &rows, max_width);

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_row(out, &header_cells, &widths)?;

    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");
    writeln!(out, "{}", rule)?;

    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, &'static str);

    impl Tabular for Pair {
        fn columns() -> &'static [&'static str] {
            &["Left", "Right"]
        }

        fn cells(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    fn rendered(rows: &[Pair], width: usize) -> String {
        let mut out = Vec::new();
        render(&mut out, rows, width).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn widths_follow_widest_cell() {
        let rows = vec![vec!["ab".to_string(), "x".to_string()]];
        assert_eq!(column_widths(&["Left", "Right"], &rows, 120), [4, 5]);

        let rows = vec![vec!["abcdefgh".to_string(), "x".to_string()]];
        assert_eq!(column_widths(&["Left", "Right"], &rows, 120), [8, 5]);
    }

    #[test]
    fn widths_are_capped_to_the_console() {
        let rows = vec![vec!["a".repeat(50), "b".repeat(50)]];
        let widths = column_widths(&["Left", "Right"], &rows, 43);
        assert_eq!(widths, [20, 20]);
    }

    #[test]
    fn narrow_columns_leave_room_for_wide_ones() {
        let rows = vec![vec!["12345678".to_string(), "a".repeat(100), "68".to_string()]];
        let widths = column_widths(&["ID", "Full name", "Age"], &rows, 60);
        assert_eq!(widths, [8, 43, 3]);
        assert_eq!(widths.iter().sum::<usize>() + 2 * SEPARATOR.len(), 60);
    }

    #[test]
    fn leftover_is_split_between_wide_columns() {
        let rows = vec![vec!["1".to_string(), "a".repeat(80), "b".repeat(80)]];
        let widths = column_widths(&["ID", "Title", "Artist"], &rows, 50);
        assert_eq!(widths, [2, 21, 21]);
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdefgh", 6), "abc...");
        assert_eq!(fit("abcdefgh", 2), "ab");
        assert_eq!(fit("Canción", 7), "Canción");
    }

    #[test]
    fn renders_header_rule_and_rows() {
        let text = rendered(&[Pair("one", "1"), Pair("three", "3")], 120);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["Left  | Right", "------+------", "one   | 1", "three | 3"]);
    }

    #[test]
    fn empty_table_still_has_header() {
        let text = rendered(&[], 120);
        assert_eq!(text, "Left | Right\n-----+------\n");
    }
}
