mod composite_file_loader;
mod docx_adapter;
mod pdf_adapter;
mod text_normalizer;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use pdf_adapter::PdfAdapter;
pub use text_normalizer::{normalize_page_text, split_paragraphs};
