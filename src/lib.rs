//! Hornet - Rust 计划执行智能体
//!
//! 模块划分：
//! - **actions**: 可插拔动作（注册表、执行器、Search stub）
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 错误类型
//! - **deck**: 演示文稿结构与生成器
//! - **llm**: LLM 客户端抽象与实现（OpenAI 兼容 / Scripted）
//! - **memory**: 对话消息与子任务转写
//! - **react**: 回复分类器、Planner、Plan/Think/Act 主循环
//! - **render**: Deck -> 静态 HTML 幻灯片

pub mod actions;
pub mod config;
pub mod core;
pub mod deck;
pub mod llm;
pub mod memory;
pub mod observability;
pub mod react;
pub mod render;
