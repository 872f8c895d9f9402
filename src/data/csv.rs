//! Header-aware CSV reader for reference datasets.
//!
//! Comma delimited, double-quote quoting with `""` escapes, LF or CRLF line
//! endings. Fields are trimmed and blank lines skipped. Columns other than the
//! source and target are ignored, but a row wider than the header is rejected.

use crate::error::DataLoadError;

use super::types::{ColumnNames, Reference};

/// Parse dataset text into references, in file order.
///
/// # Errors
/// Returns [`DataLoadError`] when the header lacks a required column, a row is
/// too short to reach both columns or wider than the header, a quote is never
/// closed, or no data rows follow the header.
pub fn parse_references(text: &str, columns: &ColumnNames) -> Result<Vec<Reference>, DataLoadError> {
	let mut records = Records::new(text.strip_prefix('\u{feff}').unwrap_or(text));

	let header = records.next().transpose()?.ok_or(DataLoadError::MissingHeader)?;
	let source_col = column_position(&header.fields, &columns.source)?;
	let target_col = column_position(&header.fields, &columns.target)?;
	let expected = source_col.max(target_col) + 1;
	let header_width = header.fields.len();

	let mut references = Vec::new();
	for record in records {
		let mut record = record?;
		if record.fields.len() < expected {
			return Err(DataLoadError::ShortRow {
				line: record.line,
				found: record.fields.len(),
				expected,
			});
		}
		if record.fields.len() > header_width {
			return Err(DataLoadError::WideRow {
				line: record.line,
				found: record.fields.len(),
				expected: header_width,
			});
		}
		let source = std::mem::take(&mut record.fields[source_col]);
		let target = std::mem::take(&mut record.fields[target_col]);
		references.push(Reference { source, target });
	}

	if references.is_empty() {
		return Err(DataLoadError::Empty);
	}
	Ok(references)
}

fn column_position(header: &[String], name: &str) -> Result<usize, DataLoadError> {
	header
		.iter()
		.position(|field| field == name)
		.ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
}

#[derive(Debug)]
struct Record {
	line: usize,
	fields: Vec<String>,
}

struct Records<'a> {
	input: &'a str,
	pos: usize,
	line: usize,
}

impl<'a> Records<'a> {
	fn new(input: &'a str) -> Self {
		Self {
			input,
			pos: 0,
			line: 1,
		}
	}

	fn read_fields(&mut self) -> Result<Vec<String>, DataLoadError> {
		let rest = &self.input[self.pos..];
		let mut fields = Vec::new();
		let mut field = String::new();
		let mut quoted = false;
		let mut quote_line = self.line;
		let mut chars = rest.char_indices().peekable();

		while let Some((offset, c)) = chars.next() {
			if quoted {
				match c {
					'"' if chars.peek().is_some_and(|&(_, next)| next == '"') => {
						chars.next();
						field.push('"');
					}
					'"' => quoted = false,
					'\n' => {
						self.line += 1;
						field.push(c);
					}
					_ => field.push(c),
				}
				continue;
			}

			match c {
				'"' if field.trim().is_empty() => {
					field.clear();
					quoted = true;
					quote_line = self.line;
				}
				',' => fields.push(finish(&mut field)),
				'\r' if chars.peek().is_some_and(|&(_, next)| next == '\n') => {}
				'\n' => {
					self.line += 1;
					self.pos += offset + 1;
					fields.push(finish(&mut field));
					return Ok(fields);
				}
				_ => field.push(c),
			}
		}

		if quoted {
			return Err(DataLoadError::UnterminatedQuote { line: quote_line });
		}
		self.pos = self.input.len();
		fields.push(finish(&mut field));
		Ok(fields)
	}
}

impl Iterator for Records<'_> {
	type Item = Result<Record, DataLoadError>;

	fn next(&mut self) -> Option<Self::Item> {
		while self.pos < self.input.len() {
			let line = self.line;
			let fields = match self.read_fields() {
				Ok(fields) => fields,
				Err(err) => {
					self.pos = self.input.len();
					return Some(Err(err));
				}
			};
			if fields.len() == 1 && fields[0].is_empty() {
				continue;
			}
			return Some(Ok(Record { line, fields }));
		}
		None
	}
}

fn finish(field: &mut String) -> String {
	let value = field.trim().to_string();
	field.clear();
	value
}
