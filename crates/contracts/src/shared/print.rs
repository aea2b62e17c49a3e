//! Printable HTML document for the current list page.

use chrono::NaiveDate;

/// Records that can be listed in the printed table.
///
/// The printed columns are the human ones, not the export keys.
pub trait Printable {
    fn print_headers() -> Vec<&'static str>;
    fn print_row(&self) -> Vec<String>;
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrintTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PrintTable {
    pub fn from_records<T: Printable>(records: &[T]) -> Self {
        Self {
            headers: T::print_headers().into_iter().map(String::from).collect(),
            rows: records.iter().map(Printable::print_row).collect(),
        }
    }

    fn to_html(&self) -> String {
        let mut html = String::from("<table><thead><tr>");
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html
    }
}

const PRINT_STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 20px; }
h1 { color: #4f46e5; border-bottom: 2px solid #4f46e5; padding-bottom: 10px; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f8f9fa; font-weight: bold; }
.header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px; }
.logo { font-size: 24px; font-weight: bold; color: #4f46e5; }
.date { color: #6b7280; }
@media print { .no-print { display: none; } }
"#;

pub const BRAND_NAME: &str = "Pharma Connect";

#[derive(Debug, Clone, PartialEq)]
pub struct PrintDocument {
    pub title: String,
    pub generated_on: NaiveDate,
    pub table: PrintTable,
}

impl PrintDocument {
    pub fn new<T: Printable>(title: impl Into<String>, generated_on: NaiveDate, records: &[T]) -> Self {
        Self {
            title: title.into(),
            generated_on,
            table: PrintTable::from_records(records),
        }
    }

    /// Complete standalone page, written into the print window as is.
    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title} - {BRAND_NAME}</title>\n<style>{PRINT_STYLE}</style>\n</head>\n<body>\n<div class=\"header\">\n<div class=\"logo\">{BRAND_NAME}</div>\n<div class=\"date\">Generated on: {date}</div>\n</div>\n<h1>{title}</h1>\n{table}\n</body>\n</html>\n",
            date = self.generated_on.format("%d/%m/%Y"),
            table = self.table.to_html(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, u32);

    impl Printable for Item {
        fn print_headers() -> Vec<&'static str> {
            vec!["Product Name", "Stock"]
        }

        fn print_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>A & B</b>"), "&lt;b&gt;A &amp; B&lt;/b&gt;");
        assert_eq!(escape_html("\"x\" 'y'"), "&quot;x&quot; &#39;y&#39;");
    }

    #[test]
    fn test_document_layout() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let doc = PrintDocument::new("Stock Management", date, &[Item("Cough <Syrup>", 0)]);
        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Stock Management - Pharma Connect</title>"));
        assert!(html.contains("Generated on: 05/03/2024"));
        assert!(html.contains("<th>Product Name</th><th>Stock</th>"));
        assert!(html.contains("<td>Cough &lt;Syrup&gt;</td><td>0</td>"));
        assert!(!html.contains("<Syrup>"));
    }
}
