//! Application services orchestrating the storage ports.

mod tasks;

pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};
