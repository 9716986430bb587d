//! Process I/O: the `Invoker` seam and the `SystemInvoker` that spawns the
//! external separation tool with inherited standard streams.
pub mod process;
pub use process::{Invoker, SystemInvoker, exit_code_of};
