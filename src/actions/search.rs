//! Search 动作（canned stub）
//!
//! 对一小组固定查询返回预置结果，其余查询返回嵌入原始查询串的模板文案；
//! 供参考实现与测试夹具使用，真实工具可通过 ActionRegistry 替换。

use async_trait::async_trait;

use crate::actions::Action;

/// 模拟搜索：大小写不敏感的子串匹配
pub struct SearchAction;

#[async_trait]
impl Action for SearchAction {
    fn name(&self) -> &str {
        "Search"
    }

    fn description(&self) -> &str {
        "Simulated search over a fixed set of canned results. Argument: free-text query."
    }

    async fn execute(&self, argument: &str) -> Result<String, String> {
        let query = argument.to_lowercase();

        let result = if query.contains("bitcoin ticker") {
            "BTC".to_string()
        } else if query.contains("price of btc") || query.contains("bitcoin price") {
            "It's $54,000".to_string()
        } else if query.contains("weather") {
            "It's 72°F and sunny".to_string()
        } else {
            format!(
                "Search results for '{}': Various relevant information found.",
                argument
            )
        };

        Ok(result)
    }
}
