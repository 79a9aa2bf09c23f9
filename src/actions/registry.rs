//! 动作注册表
//!
//! 所有动作实现 Action trait（name / description / execute），由 ActionRegistry 按名注册与查找；
//! 编排器不直接认识任何具体动作，换真实工具无需改动循环。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

/// 动作 trait：名称与 `Action: name(argument)` 中的 name 对应，argument 为去引号后的参数串
#[async_trait]
pub trait Action: Send + Sync {
    /// 动作名称（分类器元数据中的 name）
    fn name(&self) -> &str;

    /// 动作描述
    fn description(&self) -> &str;

    /// 执行动作，返回观察文本
    async fn execute(&self, argument: &str) -> Result<String, String>;
}

/// 动作注册表：按名称存储 Arc<dyn Action>
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, action: impl Action + 'static) {
        let name = action.name().to_string();
        self.actions.insert(name, Arc::new(action));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(name).cloned()
    }

    pub fn action_names(&self) -> Vec<String> {
        self.actions.keys().cloned().collect()
    }
}
