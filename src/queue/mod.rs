//! Supporting FIFO used by the breadth-first algorithms.

pub mod fifo;

pub use fifo::Queue;
