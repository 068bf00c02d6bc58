/// Header row plus data rows, exactly as split from the raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Splits raw CSV text on line breaks and commas, trimming every field.
///
/// Blank lines are discarded; the first surviving line is the header row.
/// Quoted fields and embedded commas/newlines are NOT supported: a value
/// containing a comma shifts every column after it. Downstream mapping
/// depends on this exact alignment, so the naive split is part of the
/// contract rather than a shortcut to fix.
pub fn parse_csv(text: &str) -> ParsedCsv {
    let split_line = |line: &str| -> Vec<String> {
        line.split(',').map(|field| field.trim().to_string()).collect()
    };

    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let headers = match lines.next() {
        Some(header) => split_line(header),
        None => return ParsedCsv::default(),
    };
    let rows = lines.map(split_line).collect();

    ParsedCsv { headers, rows }
}
