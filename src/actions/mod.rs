//! 动作层：可插拔的动作注册表、执行器与参考 Search stub

pub mod executor;
pub mod registry;
pub mod search;

pub use executor::ActionExecutor;
pub use registry::{Action, ActionRegistry};
pub use search::SearchAction;
