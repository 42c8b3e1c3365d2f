use super::ExportError;
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

/// Render a delimited table (header row first) as an HTML table.
///
/// Header cells are trimmed and left-justified, and every body row is prefixed with its
/// zero-based row index. `path` is only used for error context.
pub fn render_html<R: Read>(reader: R, path: &Path) -> Result<String, ExportError> {
    let csv_error = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = csv_reader.headers().map_err(csv_error)?.clone();

    let mut out = String::new();
    let _ = writeln!(out, "<table border=\"1\" class=\"dataframe\">");
    let _ = writeln!(out, "  <thead>");
    let _ = writeln!(out, "    <tr style=\"text-align: left;\">");
    let _ = writeln!(out, "      <th></th>");
    for header in headers.iter() {
        let _ = writeln!(out, "      <th>{}</th>", escape(header));
    }
    let _ = writeln!(out, "    </tr>");
    let _ = writeln!(out, "  </thead>");
    let _ = writeln!(out, "  <tbody>");

    for (index, row) in csv_reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        let _ = writeln!(out, "    <tr>");
        let _ = writeln!(out, "      <th>{index}</th>");
        for cell in row.iter() {
            let _ = writeln!(out, "      <td>{}</td>", escape(cell));
        }
        let _ = writeln!(out, "    </tr>");
    }

    let _ = writeln!(out, "  </tbody>");
    let _ = writeln!(out, "</table>");

    Ok(out)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
