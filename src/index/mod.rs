pub mod merged;

pub use merged::{IndexRow, MergedIndex};

use crate::core::banner::SearchItemType;

/// 结果索引抽象：屏幕侧负责合并自然结果与横幅的列表控制器。
///
/// ## 契约（重要）
/// - `container_index` 指向调用方自己容器内的条目（横幅即注册表槽位），
///   由调用方保证稳定：不复用、不重排。
/// - `preferred_position` 只是布局提示，最终行序由实现端在 build 阶段决定。
pub trait ResultIndex: Send + Sync {
    fn add_item(&self, item: SearchItemType, preferred_position: usize, container_index: usize);
}
