//! 回复分类器
//!
//! classify_plan 从计划文本提取编号清单项；classify_response 按前缀把一条模型回复
//! 归类为 Plan / PlanItem / Thought / Action / Observation / Answer。
//! 模型输出本质上是不可靠的自由文本，因此分类器从不报错：任何输入都产出某个事件，
//! 无前缀时兜底为 Thought。

use regex::Regex;

use crate::react::events::{ActionCall, ClassifiedEvent, EventKind};

/// 从计划回复中提取编号清单项（`1. xxx`），非匹配行静默跳过，无匹配时返回空序列
pub fn classify_plan(text: &str) -> Vec<String> {
    let item_re = Regex::new(r"^\s*\d+\.\s*(.+)$").unwrap();
    text.lines()
        .filter_map(|line| item_re.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// 按前缀分类一条模型回复（首个命中生效，大小写敏感；`Final Answer:` 先于 `Answer:` 检查）
pub fn classify_response(text: &str) -> ClassifiedEvent {
    let text = text.trim();

    if let Some(rest) = text.strip_prefix("Plan:") {
        return ClassifiedEvent::new(EventKind::Plan, rest.trim());
    }
    if let Some(rest) = text.strip_prefix("PlanItem:") {
        return ClassifiedEvent::new(EventKind::PlanItem, rest.trim());
    }
    if let Some(rest) = text.strip_prefix("Thought:") {
        return ClassifiedEvent::new(EventKind::Thought, rest.trim());
    }
    if let Some(rest) = text.strip_prefix("Action:") {
        return classify_action(rest.trim());
    }
    if let Some(rest) = text.strip_prefix("Observation:") {
        return ClassifiedEvent::new(EventKind::Observation, rest.trim());
    }
    if let Some(rest) = text.strip_prefix("Final Answer:") {
        return ClassifiedEvent::new(EventKind::Answer, rest.trim());
    }
    if let Some(rest) = text.strip_prefix("Answer:") {
        return ClassifiedEvent::new(EventKind::Answer, rest.trim());
    }

    // 无前缀：兜底为 Thought，正文为整段修剪后的输入
    ClassifiedEvent::new(EventKind::Thought, text)
}

/// 解析 Action 正文：`name(argument)` 语法命中时附带元数据，否则仅保留正文（不算错误）
fn classify_action(content: &str) -> ClassifiedEvent {
    // argument 取到最后一个右括号为止
    let call_re = Regex::new(r"^(\w+)\((.*)\)").unwrap();
    match call_re.captures(content) {
        Some(caps) => {
            let name = caps[1].to_string();
            let argument = strip_surrounding_quotes(&caps[2]).to_string();
            ClassifiedEvent {
                kind: EventKind::Action,
                text: content.to_string(),
                action: Some(ActionCall { name, argument }),
            }
        }
        None => ClassifiedEvent::new(EventKind::Action, content),
    }
}

/// 去掉一层成对的单引号或双引号
fn strip_surrounding_quotes(s: &str) -> &str {
    if s.len() >= 2
        && ((s.starts_with('\'') && s.ends_with('\''))
            || (s.starts_with('"') && s.ends_with('"')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbered_plan() {
        let text = "Here's the plan:\n1. Identify the ticker symbol\n2. Search for current price\n3. Format the final answer\n";
        let result = classify_plan(text);
        assert_eq!(
            result,
            vec![
                "Identify the ticker symbol",
                "Search for current price",
                "Format the final answer"
            ]
        );
    }

    #[test]
    fn test_parse_plan_with_extra_text() {
        let text = "I'll help you with that. Here's my plan:\n\n1. First, check the weather API\n2. Get temperature data\n3. Convert to requested format\n\nThis should give us the information we need.";
        let result = classify_plan(text);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], "First, check the weather API");
    }

    #[test]
    fn test_parse_plan_with_indentation() {
        let text = "\n    1. Step one\n    2. Step two\n    3. Step three\n";
        let result = classify_plan(text);
        assert_eq!(result, vec!["Step one", "Step two", "Step three"]);
    }

    #[test]
    fn test_empty_plan() {
        let result = classify_plan("This text has no numbered items.");
        assert!(result.is_empty());
    }

    #[test]
    fn test_classify_thought() {
        let event = classify_response("Thought: I need to find the Bitcoin ticker symbol first.");
        assert_eq!(event.kind, EventKind::Thought);
        assert_eq!(event.text, "I need to find the Bitcoin ticker symbol first.");
        assert!(event.action.is_none());
    }

    #[test]
    fn test_classify_plan_prefix() {
        let event = classify_response("Plan: do the thing");
        assert_eq!(event.kind, EventKind::Plan);
        assert_eq!(event.text, "do the thing");
    }

    #[test]
    fn test_classify_plan_item() {
        let event = classify_response("PlanItem: Identify the ticker symbol");
        assert_eq!(event.kind, EventKind::PlanItem);
        assert_eq!(event.text, "Identify the ticker symbol");
    }

    #[test]
    fn test_classify_action_double_quotes() {
        let event = classify_response("Action: Search(\"Bitcoin ticker symbol\")");
        assert_eq!(event.kind, EventKind::Action);
        assert_eq!(event.text, "Search(\"Bitcoin ticker symbol\")");
        let call = event.action.expect("call syntax should match");
        assert_eq!(call.name, "Search");
        assert_eq!(call.argument, "Bitcoin ticker symbol");
    }

    #[test]
    fn test_classify_action_single_quotes() {
        let event = classify_response("Action: Search('current BTC price')");
        let call = event.action.expect("call syntax should match");
        assert_eq!(call.argument, "current BTC price");
    }

    #[test]
    fn test_classify_action_unquoted_argument() {
        let event = classify_response("Action: Lookup(btc)");
        let call = event.action.unwrap();
        assert_eq!(call.name, "Lookup");
        assert_eq!(call.argument, "btc");
    }

    #[test]
    fn test_classify_action_without_call_syntax() {
        let event = classify_response("Action: just do something unstructured");
        assert_eq!(event.kind, EventKind::Action);
        assert_eq!(event.text, "just do something unstructured");
        assert!(event.action.is_none());
    }

    #[test]
    fn test_classify_action_nested_parens() {
        // argument 取到最后一个右括号
        let event = classify_response("Action: Search('price (in USD)')");
        let call = event.action.unwrap();
        assert_eq!(call.argument, "price (in USD)");
    }

    #[test]
    fn test_classify_observation() {
        let event = classify_response("Observation: The ticker symbol is BTC");
        assert_eq!(event.kind, EventKind::Observation);
        assert_eq!(event.text, "The ticker symbol is BTC");
    }

    #[test]
    fn test_classify_final_answer() {
        let event = classify_response("Final Answer: The current price of Bitcoin (BTC) is $54,000.");
        assert_eq!(event.kind, EventKind::Answer);
        assert_eq!(event.text, "The current price of Bitcoin (BTC) is $54,000.");
    }

    #[test]
    fn test_classify_answer_short_form() {
        let event = classify_response("Answer: BTC is trading at $54,000");
        assert_eq!(event.kind, EventKind::Answer);
        assert_eq!(event.text, "BTC is trading at $54,000");
    }

    #[test]
    fn test_default_to_thought() {
        let event = classify_response("This is just some reasoning without a prefix.");
        assert_eq!(event.kind, EventKind::Thought);
        assert_eq!(event.text, "This is just some reasoning without a prefix.");
    }

    #[test]
    fn test_whitespace_handling() {
        let event = classify_response("  Thought:   Extra spaces everywhere   ");
        assert_eq!(event.kind, EventKind::Thought);
        assert_eq!(event.text, "Extra spaces everywhere");
    }

    #[test]
    fn test_reclassification_is_stable() {
        // 对自身输出再包一层相同前缀重新分类，得到逐字段一致的事件
        let first = classify_response("Thought:   stable text  ");
        let second = classify_response(&format!("Thought: {}", first.text));
        assert_eq!(first, second);
    }
}
