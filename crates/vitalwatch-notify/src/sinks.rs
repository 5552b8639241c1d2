pub mod fanout;
pub mod file;
pub mod log;
pub mod memory;

pub use fanout::FanoutSink;
pub use file::FileSink;
pub use log::LogSink;
pub use memory::MemorySink;
