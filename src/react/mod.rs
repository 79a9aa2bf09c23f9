//! 认知层：回复分类器、Planner、Plan/Think/Act 主循环

pub mod classifier;
pub mod events;
pub mod loop_;
pub mod planner;

pub use classifier::{classify_plan, classify_response};
pub use events::{ActionCall, ClassifiedEvent, EventKind};
pub use loop_::{run_agent, AgentResult};
pub use planner::Planner;
