//! 动作执行器
//!
//! 持有 ActionRegistry，把一条 Action 事件变成观察文本；每次调用输出结构化审计日志（JSON）。
//! 编排器的契约只要求同步拿回某个字符串：未知动作名、缺失调用元数据都回退到通用成功文案，
//! 动作自身的失败转成 "Error: ..." 观察文本，绝不向循环抛错。

use std::time::Instant;

use crate::actions::ActionRegistry;
use crate::react::ClassifiedEvent;

/// 未识别动作的通用观察文本
const GENERIC_OBSERVATION: &str = "Action executed successfully.";

/// 动作执行器：注册表查找 + 审计日志
pub struct ActionExecutor {
    registry: ActionRegistry,
}

impl ActionExecutor {
    pub fn new(registry: ActionRegistry) -> Self {
        Self { registry }
    }

    pub fn action_names(&self) -> Vec<String> {
        self.registry.action_names()
    }

    /// 执行一条 Action 事件并返回观察文本
    pub async fn execute(&self, event: &ClassifiedEvent) -> String {
        let start = Instant::now();

        let (name, outcome, observation) = match &event.action {
            Some(call) => match self.registry.get(&call.name) {
                Some(action) => match action.execute(&call.argument).await {
                    Ok(obs) => (call.name.clone(), "ok", obs),
                    Err(e) => (call.name.clone(), "error", format!("Error: {}", e)),
                },
                None => (call.name.clone(), "unknown", GENERIC_OBSERVATION.to_string()),
            },
            None => ("-".to_string(), "no_call_syntax", GENERIC_OBSERVATION.to_string()),
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        let audit = serde_json::json!({
            "event": "action_audit",
            "action": name,
            "outcome": outcome,
            "duration_ms": duration_ms,
        });
        tracing::info!(audit = %audit.to_string(), "action");

        observation
    }
}
