// LaTeX assembly and PDF export.

pub mod compile;
pub mod handlers;
pub mod latex;

pub use compile::{CompileError, PdfCompiler};
pub use latex::render_document;
