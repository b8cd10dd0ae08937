use crate::core::{Book, OutputFormat};
use crate::utils::error::{BookwormsError, Result};

pub fn render(books: &[Book], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(books)),
        OutputFormat::Json => render_json(books),
        OutputFormat::Csv => render_csv(books),
    }
}

/// One `- {title} by {author}` line per book.
pub fn render_text(books: &[Book]) -> String {
    books.iter().map(|book| format!("- {}\n", book)).collect()
}

pub fn render_json(books: &[Book]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(books)?;
    json.push('\n');
    Ok(json)
}

pub fn render_csv(books: &[Book]) -> Result<String> {
    // header written by hand so an empty result still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(["author", "title"])?;
    for book in books {
        writer.write_record([book.author.as_str(), book.title.as_str()])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| BookwormsError::IoError(e.into_error()))?;

    String::from_utf8(data).map_err(|e| BookwormsError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Vec<Book> {
        vec![
            Book::new("Margaret Atwood", "Oryx and Crake"),
            Book::new("Sylvia Plath", "The Bell Jar"),
        ]
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&books());
        assert_eq!(text, "- Oryx and Crake by Margaret Atwood\n- The Bell Jar by Sylvia Plath\n");
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&books()).unwrap();
        let decoded: Vec<Book> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, books());
        assert_eq!(render_json(&[]).unwrap().trim(), "[]");
    }

    #[test]
    fn test_render_csv_quotes_fields_with_commas() {
        let csv = render_csv(&[Book::new("Le Guin, Ursula K.", "The Dispossessed")]).unwrap();
        assert_eq!(csv, "author,title\n\"Le Guin, Ursula K.\",The Dispossessed\n");
    }

    #[test]
    fn test_render_csv_empty_has_header() {
        assert_eq!(render_csv(&[]).unwrap(), "author,title\n");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        assert_eq!(render(&books(), OutputFormat::Text).unwrap(), render_text(&books()));
        assert!(render(&books(), OutputFormat::Csv).unwrap().starts_with("author,title\n"));
    }
}
