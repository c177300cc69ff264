//! Header-driven CSV imports.
//!
//! The first non-blank line names the columns; see
//! [`csv_header_aliases`](crate::config::csv_header_aliases) for the accepted
//! spellings. Without a name column the whole import is rejected.

use std::fmt;
use std::io::{Cursor, SeekFrom};

use crate::config::{csv_header_aliases, FOIL_TRUTHY};
use crate::import::collect_lines;
use crate::import::line::{parse_quantity, LineOutcome, LineParser};
use crate::models::{ParseError, ParseResult, ParsedCard};

/// Column positions resolved from a CSV header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvColumns {
    pub quantity: Option<usize>,
    pub name: usize,
    pub set_code: Option<usize>,
    pub collector_number: Option<usize>,
    pub foil: Option<usize>,
}

// ---------------------------------------------------------------------------
// RowSplitter — One reader and record buffer reused for every line
// ---------------------------------------------------------------------------

/// Splits single CSV lines, honoring quotes and `""` escapes. Fields are
/// trimmed. The reader is rewound before each line so a stray quote never
/// runs into the next row.
struct RowSplitter {
    reader: ::csv::Reader<Cursor<Vec<u8>>>,
    record: ::csv::StringRecord,
}

impl RowSplitter {
    fn new() -> Self {
        let reader = ::csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(::csv::Trim::All)
            .from_reader(Cursor::new(Vec::new()));
        Self {
            reader,
            record: ::csv::StringRecord::new(),
        }
    }

    fn split(&mut self, line: &str) -> Option<&::csv::StringRecord> {
        let buf = self.reader.get_mut().get_mut();
        buf.clear();
        buf.extend_from_slice(line.as_bytes());

        self.reader
            .seek_raw(SeekFrom::Start(0), ::csv::Position::new())
            .ok()?;
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(&self.record),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// CsvParser
// ---------------------------------------------------------------------------

pub struct CsvParser {
    columns: CsvColumns,
    splitter: RowSplitter,
}

impl fmt::Debug for CsvParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvParser")
            .field("columns", &self.columns)
            .finish()
    }
}

impl CsvParser {
    /// Resolve columns from the header line (reported as line 1 on failure).
    pub fn from_header(header: &str) -> Result<Self, ParseError> {
        let mut splitter = RowSplitter::new();
        let cells: Vec<String> = splitter
            .split(header)
            .map(|record| record.iter().map(|c| c.to_lowercase()).collect())
            .unwrap_or_default();

        let aliases = csv_header_aliases();
        let find = |column: &str| {
            let names = aliases.get(column).copied().unwrap_or_default();
            cells.iter().position(|c| names.contains(&c.as_str()))
        };

        let name = find("name").ok_or_else(|| {
            ParseError::new(1, header, "CSV must have a 'name' or 'card' column")
        })?;

        Ok(Self {
            columns: CsvColumns {
                quantity: find("quantity"),
                name,
                set_code: find("set_code"),
                collector_number: find("collector_number"),
                foil: find("foil"),
            },
            splitter,
        })
    }

    pub fn columns(&self) -> &CsvColumns {
        &self.columns
    }

    pub fn parse_line(&mut self, line: &str, line_number: usize) -> LineOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return LineOutcome::Skip;
        }
        self.parse_row(line, line_number).into()
    }

    fn parse_row(&mut self, line: &str, line_number: usize) -> Result<ParsedCard, ParseError> {
        let columns = &self.columns;
        let fields = self
            .splitter
            .split(line)
            .ok_or_else(|| ParseError::new(line_number, line, "Could not parse line"))?;
        let field = |idx: Option<usize>| idx.and_then(|i| fields.get(i)).unwrap_or("");

        let name = field(Some(columns.name));
        if name.is_empty() {
            return Err(ParseError::new(line_number, line, "Card name is empty"));
        }

        let raw_quantity = match field(columns.quantity) {
            "" => "1",
            raw => raw,
        };
        let quantity = parse_quantity(raw_quantity)
            .map_err(|reason| ParseError::new(line_number, line, reason))?;

        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

        Ok(ParsedCard {
            name: name.to_string(),
            quantity,
            set_code: non_empty(field(columns.set_code)).map(|s| s.to_uppercase()),
            collector_number: non_empty(field(columns.collector_number)),
            foil: columns.foil.map(|_| {
                let raw = field(columns.foil).to_lowercase();
                FOIL_TRUTHY.contains(&raw.as_str())
            }),
        })
    }
}

/// Parse a whole CSV import. Blank lines are dropped first, so line numbers
/// count non-blank lines with the header as line 1.
pub(crate) fn parse_csv(text: &str) -> ParseResult {
    let lines: Vec<&str> = text
        .trim()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .collect();

    let Some((header, rows)) = lines.split_first() else {
        return ParseResult::default();
    };

    let parser = match CsvParser::from_header(header) {
        Ok(parser) => parser,
        Err(err) => {
            tracing::warn!(header = %header.trim(), "CSV header has no name column");
            return ParseResult {
                cards: Vec::new(),
                errors: vec![err],
            };
        }
    };
    tracing::debug!(columns = ?parser.columns(), "resolved CSV header");

    let numbered = rows.iter().enumerate().map(|(i, line)| (i + 2, *line));
    collect_lines(&mut LineParser::Csv(parser), numbered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(splitter: &mut RowSplitter, line: &str) -> Vec<String> {
        splitter
            .split(line)
            .map(|r| r.iter().map(str::to_string).collect())
            .unwrap()
    }

    #[test]
    fn split_handles_quotes_and_escapes() {
        let mut splitter = RowSplitter::new();
        assert_eq!(
            split(&mut splitter, r#"2,"Borrowing 100,000 Arrows",ME3"#),
            vec!["2", "Borrowing 100,000 Arrows", "ME3"]
        );
        assert_eq!(
            split(&mut splitter, r#"1,"The ""Ultimate"" Nightmare""#),
            vec!["1", r#"The "Ultimate" Nightmare"#]
        );
    }

    #[test]
    fn splitter_reuse_does_not_leak_between_lines() {
        let mut splitter = RowSplitter::new();
        assert_eq!(split(&mut splitter, "a,b,c,d,e"), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(split(&mut splitter, "x"), vec!["x"]);
        assert_eq!(split(&mut splitter, r#""open,quote"#), vec!["open,quote"]);
        assert_eq!(split(&mut splitter, "Opt , 2"), vec!["Opt", "2"]);
    }

    #[test]
    fn one_parser_handles_every_row() {
        let mut parser = CsvParser::from_header("name,qty").unwrap();
        let outcomes: Vec<LineOutcome> = [r#""Opt,2"#, "Island,3", "# note", ",4", "Swamp,1"]
            .iter()
            .enumerate()
            .map(|(i, line)| parser.parse_line(line, i + 2))
            .collect();

        assert_eq!(outcomes[0], LineOutcome::Card(ParsedCard::new("Opt,2", 1)));
        assert_eq!(outcomes[1], LineOutcome::Card(ParsedCard::new("Island", 3)));
        assert_eq!(outcomes[2], LineOutcome::Skip);
        assert!(matches!(&outcomes[3], LineOutcome::Error(e) if e.line == 5));
        assert_eq!(outcomes[4], LineOutcome::Card(ParsedCard::new("Swamp", 1)));
    }

    #[test]
    fn header_resolution_is_case_insensitive() {
        let parser = CsvParser::from_header("Count, Card Name ,CARD,Edition,CN,IsFoil").unwrap();
        assert_eq!(
            parser.columns(),
            &CsvColumns {
                quantity: Some(0),
                name: 2,
                set_code: Some(3),
                collector_number: Some(4),
                foil: Some(5),
            }
        );
    }

    #[test]
    fn header_without_name_fails_on_line_one() {
        let err = CsvParser::from_header("qty,set").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.text, "qty,set");
    }

    #[test]
    fn short_row_defaults_missing_cells() {
        let mut parser = CsvParser::from_header("name,quantity,set").unwrap();
        match parser.parse_line("Opt", 2) {
            LineOutcome::Card(card) => assert_eq!(card, ParsedCard::new("Opt", 1)),
            other => panic!("expected card, got {other:?}"),
        }
    }
}
