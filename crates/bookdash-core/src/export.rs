//! CSV export of a harvested collection.

use std::io::{self, Write};

use crate::catalogue::CatalogueItem;

const HEADER: &str = "title,price,availability,rating";

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_field<W: Write>(w: &mut W, field: &str) -> io::Result<()> {
    if needs_quotes(field) {
        let escaped = field.replace('"', "\"\"");
        write!(w, "\"{escaped}\"")
    } else {
        write!(w, "{field}")
    }
}

/// Write the collection as CSV with a header row, one record per line.
///
/// Prices render with two decimal places; text fields are quoted only when
/// they contain a separator, quote, or newline.
///
/// # Errors
///
/// Propagates any I/O error from the writer.
pub fn write_csv<W: Write>(mut w: W, items: &[CatalogueItem]) -> io::Result<()> {
    writeln!(w, "{HEADER}")?;
    for item in items {
        write_field(&mut w, &item.title)?;
        write!(w, ",{:.2},", item.price)?;
        write_field(&mut w, &item.availability)?;
        writeln!(w, ",{}", item.rating)?;
    }
    Ok(())
}

/// Render the collection to an in-memory CSV string.
#[must_use]
pub fn to_csv(items: &[CatalogueItem]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing to a Vec<u8> cannot fail.
    let _ = write_csv(&mut buf, items);
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, price: f64, availability: &str, rating: u8) -> CatalogueItem {
        CatalogueItem {
            title: title.to_owned(),
            price,
            availability: availability.to_owned(),
            rating,
        }
    }

    #[test]
    fn emits_header_and_one_line_per_record() {
        let items = vec![
            item("A Light in the Attic", 51.77, "In stock", 3),
            item("Tipping the Velvet", 53.74, "In stock", 1),
        ];
        let csv = to_csv(&items);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "title,price,availability,rating");
        assert_eq!(lines[1], "A Light in the Attic,51.77,In stock,3");
        assert_eq!(lines[2], "Tipping the Velvet,53.74,In stock,1");
    }

    #[test]
    fn quotes_titles_containing_commas() {
        let items = vec![item("Me Talk Pretty One Day, Again", 12.00, "In stock", 4)];
        let csv = to_csv(&items);
        assert!(csv.contains("\"Me Talk Pretty One Day, Again\",12.00"));
    }

    #[test]
    fn doubles_embedded_quotes() {
        let items = vec![item("The \"Best\" Book", 5.50, "In stock", 2)];
        let csv = to_csv(&items);
        assert!(csv.contains("\"The \"\"Best\"\" Book\""));
    }

    #[test]
    fn empty_collection_is_header_only() {
        let csv = to_csv(&[]);
        assert_eq!(csv, "title,price,availability,rating\n");
    }
}
