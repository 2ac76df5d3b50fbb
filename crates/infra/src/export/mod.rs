mod xlsx;

pub use xlsx::XlsxSink;
