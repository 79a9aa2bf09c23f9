//! 演示文稿层：deck.json 数据结构与生成器

pub mod generator;
pub mod types;

pub use generator::DeckGenerator;
pub use types::{Deck, Layout, Slide, SlideContent, Theme};
