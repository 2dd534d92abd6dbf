//! Rendering of pipeline results: terminal output, HTML report, and a
//! collecting presenter for tests.

pub mod html;
pub mod presenter;
pub mod terminal;

pub use html::HtmlPresenter;
pub use presenter::{CollectingPresenter, PresentedEvent, Presenter};
pub use terminal::TerminalPresenter;
