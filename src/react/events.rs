//! 执行日志事件：一条模型回复经分类后的类型化表示
//!
//! 事件由分类器创建后不可变，按生成顺序追加进 run 的日志，绝不重排或去重。

use serde::Serialize;

/// 事件类型（Plan 可被分类器识别，但编排器自身从不产生该类事件）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Plan,
    PlanItem,
    Thought,
    Action,
    Observation,
    Answer,
}

/// Action 调用元数据：`name(argument)` 语法解析成功时存在
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionCall {
    pub name: String,
    pub argument: String,
}

/// 单条分类事件：类型 + 去前缀后的正文 + 可选的 Action 元数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedEvent {
    pub kind: EventKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionCall>,
}

impl ClassifiedEvent {
    pub fn new(kind: EventKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            action: None,
        }
    }
}
