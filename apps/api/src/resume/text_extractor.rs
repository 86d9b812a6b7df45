//! Text Extractor: turns an uploaded resume (PDF or DOCX bytes) into plain text.
//!
//! Pages and paragraphs come out in document order, one boundary per `\n`.
//! Nothing is returned for a document that fails to decode; the caller gets
//! the underlying cause instead.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::str::FromStr;

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("pdf"),
            DocumentFormat::Docx => f.write_str("docx"),
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = TextExtractionError;

    /// Accepts a bare tag (`pdf`, `.docx`) or a MIME type.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let normalized = tag.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "pdf" | "application/pdf" => Ok(DocumentFormat::Pdf),
            "docx" | DOCX_MIME => Ok(DocumentFormat::Docx),
            _ => Err(TextExtractionError::UnsupportedFormat(tag.trim().to_string())),
        }
    }
}

impl DocumentFormat {
    /// Detects the format from an upload's file name extension.
    pub fn from_file_name(name: &str) -> Result<Self, TextExtractionError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| TextExtractionError::UnsupportedFormat(name.to_string()))?;
        ext.parse()
    }
}

#[derive(Debug, Error)]
pub enum TextExtractionError {
    #[error("unsupported document format '{0}'")]
    UnsupportedFormat(String),

    #[error("failed to read {format} document: {cause}")]
    DocumentRead {
        format: DocumentFormat,
        cause: String,
    },
}

fn read_error(format: DocumentFormat, cause: impl fmt::Display) -> TextExtractionError {
    TextExtractionError::DocumentRead {
        format,
        cause: cause.to_string(),
    }
}

/// Extracts the visible text of `bytes`, interpreted as `format`.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, TextExtractionError> {
    if bytes.is_empty() {
        return Err(read_error(format, "document is empty"));
    }

    let raw = match format {
        DocumentFormat::Pdf => extract_pdf_text(bytes)?,
        DocumentFormat::Docx => extract_docx_text(bytes)?,
    };

    let text = normalize_document_text(&raw);
    debug!(
        "Extracted {} chars / {} lines from {format} document",
        text.len(),
        text.lines().count()
    );
    Ok(text)
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, TextExtractionError> {
    // The PDF decoder panics on some malformed inputs; surface that as a read error.
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(read_error(DocumentFormat::Pdf, e)),
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(read_error(
                DocumentFormat::Pdf,
                format!("decoder aborted: {detail}"),
            ))
        }
    }
}

fn extract_docx_text(bytes: &[u8]) -> Result<String, TextExtractionError> {
    let docx = read_docx(bytes).map_err(|e| read_error(DocumentFormat::Docx, e))?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
            DocumentChild::Table(table) => collect_table_lines(table, &mut lines),
            _ => {}
        }
    }
    Ok(lines.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        append_paragraph_child(child, &mut buffer);
    }
    buffer
}

fn append_paragraph_child(child: &ParagraphChild, buffer: &mut String) {
    match child {
        ParagraphChild::Run(run) => append_run(run, buffer),
        ParagraphChild::Hyperlink(link) => {
            for inner in &link.children {
                append_paragraph_child(inner, buffer);
            }
        }
        _ => {}
    }
}

fn append_run(run: &Run, buffer: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(text) => buffer.push_str(&text.text),
            RunChild::Break(_) => buffer.push('\n'),
            RunChild::Tab(_) => buffer.push('\t'),
            _ => {}
        }
    }
}

fn collect_table_lines(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let row = match row {
            TableChild::TableRow(row) => row,
        };
        for cell in &row.cells {
            let cell = match cell {
                TableRowChild::TableCell(cell) => cell,
            };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => {
                        lines.push(paragraph_text(paragraph))
                    }
                    TableCellContent::Table(inner) => collect_table_lines(inner, lines),
                    _ => {}
                }
            }
        }
    }
}

/// Unifies line endings, turns page breaks into newlines and strips NUL/BOM.
fn normalize_document_text(text: &str) -> String {
    let cleaned = text
        .trim_start_matches('\u{FEFF}')
        .replace('\u{0000}', "")
        .replace("\r\n", "\n")
        .replace(['\r', '\u{000C}'], "\n");

    cleaned
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::Docx;
    use std::io::Cursor;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_format_from_tag_and_mime() {
        assert_eq!("PDF".parse::<DocumentFormat>().unwrap(), DocumentFormat::Pdf);
        assert_eq!(".docx".parse::<DocumentFormat>().unwrap(), DocumentFormat::Docx);
        assert_eq!(
            "application/pdf".parse::<DocumentFormat>().unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(DOCX_MIME.parse::<DocumentFormat>().unwrap(), DocumentFormat::Docx);
    }

    #[test]
    fn test_unsupported_tag_is_rejected() {
        let err = "rtf".parse::<DocumentFormat>().unwrap_err();
        assert!(matches!(err, TextExtractionError::UnsupportedFormat(ref t) if t == "rtf"));
    }

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(
            DocumentFormat::from_file_name("Jane_Resume.PDF").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_file_name("cv.final.docx").unwrap(),
            DocumentFormat::Docx
        );
        assert!(DocumentFormat::from_file_name("resume.doc").is_err());
        assert!(DocumentFormat::from_file_name("resume").is_err());
    }

    #[test]
    fn test_empty_document_is_read_error() {
        let err = extract_text(&[], DocumentFormat::Pdf).unwrap_err();
        assert!(matches!(err, TextExtractionError::DocumentRead { .. }));
    }

    #[test]
    fn test_corrupt_pdf_is_read_error() {
        let err = extract_text(b"%PDF-1.4\nnot really a pdf", DocumentFormat::Pdf).unwrap_err();
        match err {
            TextExtractionError::DocumentRead { format, cause } => {
                assert_eq!(format, DocumentFormat::Pdf);
                assert!(!cause.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_docx_is_read_error() {
        let err = extract_text(b"PK\x03\x04broken", DocumentFormat::Docx).unwrap_err();
        assert!(matches!(
            err,
            TextExtractionError::DocumentRead {
                format: DocumentFormat::Docx,
                ..
            }
        ));
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let bytes = build_docx(&["Jane Doe", "Education", "B.Tech 2019-2023"]);
        let text = extract_text(&bytes, DocumentFormat::Docx).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Jane Doe", "Education", "B.Tech 2019-2023"]);
    }

    #[test]
    fn test_normalize_document_text() {
        let raw = "\u{FEFF}Page one  \r\nline\u{0000}\rnext\u{000C}Page two";
        assert_eq!(
            normalize_document_text(raw),
            "Page one\nline\nnext\nPage two"
        );
    }
}
