//! HTML report with an inline autoplaying audio embed.

use std::io::Write;

use base64::Engine;

use crate::error::Result;
use crate::present::presenter::Presenter;

/// Writes a self-contained HTML document when the run finishes.
///
/// `transcript` and `translation` are buffered; the whole document is
/// written on the terminal event (`audio` or `error`), which is the last
/// thing the pipeline sends. The synthesized audio goes in as a base64
/// data URI inside an `<audio controls autoplay>` element, so opening the
/// report in a browser plays the translation immediately.
pub struct HtmlPresenter<W: Write> {
    writer: W,
    transcript: Option<String>,
    translation: Option<String>,
}

impl<W: Write> HtmlPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            transcript: None,
            translation: None,
        }
    }

    /// Consume the presenter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_head(&mut self) -> Result<()> {
        writeln!(self.writer, "<!doctype html>")?;
        writeln!(self.writer, "<html lang=\"en\">")?;
        writeln!(
            self.writer,
            "<head><meta charset=\"utf-8\"><title>parlo</title></head>"
        )?;
        writeln!(self.writer, "<body>")?;
        Ok(())
    }

    fn write_texts(&mut self) -> Result<()> {
        if let Some(text) = self.transcript.take() {
            writeln!(self.writer, "<h3>Original Text</h3>")?;
            writeln!(self.writer, "<p>{}</p>", escape(&text))?;
        }
        if let Some(text) = self.translation.take() {
            writeln!(self.writer, "<h3>Translated Text</h3>")?;
            writeln!(self.writer, "<p>{}</p>", escape(&text))?;
        }
        Ok(())
    }

    fn write_foot(&mut self) -> Result<()> {
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Minimal escaping for text interpolated into the report body.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl<W: Write + Send> Presenter for HtmlPresenter<W> {
    fn transcript(&mut self, text: &str) -> Result<()> {
        self.transcript = Some(text.to_string());
        Ok(())
    }

    fn translation(&mut self, text: &str) -> Result<()> {
        self.translation = Some(text.to_string());
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.write_head()?;
        self.write_texts()?;
        writeln!(self.writer, "<p class=\"error\">{}</p>", escape(message))?;
        self.write_foot()
    }

    fn audio(&mut self, bytes: &[u8], mime: &str) -> Result<()> {
        self.write_head()?;
        self.write_texts()?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        writeln!(
            self.writer,
            "<audio controls autoplay=\"true\"><source src=\"data:{mime};base64,{encoded}\" type=\"{mime}\"></audio>"
        )?;
        self.write_foot()
    }

    fn name(&self) -> &'static str {
        "html"
    }
}
