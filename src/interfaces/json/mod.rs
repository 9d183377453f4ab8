pub mod method_reader;
pub mod order_reader;
pub mod spend_writer;
