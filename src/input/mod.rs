mod reader;

pub use reader::{LineSource, MAX_LINE_BYTES, PromptSource, ReaderSource};
