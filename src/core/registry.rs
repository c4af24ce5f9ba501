use std::sync::{Arc, Weak};

use crate::core::banner::{Banner, BannerKind, SearchItemType};
use crate::index::ResultIndex;
use crate::visibility::VisibilityTracker;

/// mopub 横幅在结果列表中的固定期望位置
const MOPUB_PREFERRED_POSITION: usize = 2;

/// 搜索会话级横幅注册表。
///
/// 持有本次会话注入的全部横幅（仅追加，槽位 = 插入序），每次注入向结果
/// 索引上报 `(条目类型, 期望位置, 槽位)`。对结果索引只持弱引用：屏幕
/// 销毁后注入退化为 no-op（软取消，见 `add`）。
///
/// ## 契约（重要）
/// - 槽位一旦上报绝不复用、绝不重排；`get` 只接受历史上报过的槽位。
/// - 会话结束（Drop）按插入序向追踪器逐个上报移出屏幕。
pub struct BannerRegistry {
    banners: Vec<Banner>,
    index: Weak<dyn ResultIndex>,
    tracker: Arc<dyn VisibilityTracker>,
}

impl BannerRegistry {
    pub fn new(index: Weak<dyn ResultIndex>, tracker: Arc<dyn VisibilityTracker>) -> Self {
        Self {
            banners: Vec::new(),
            index,
            tracker,
        }
    }

    /// 注入一条横幅并上报槽位。
    ///
    /// 结果索引已释放时静默丢弃（不存储、不上报）。
    pub fn add(&mut self, banner: Banner) {
        let Some(index) = self.index.upgrade() else {
            tracing::debug!("result index released, dropping {} banner", banner.kind());
            return;
        };

        let kind = banner.kind();
        self.banners.push(banner);
        let slot = self.banners.len() - 1;

        let (item, preferred_position) = match kind {
            BannerKind::Mopub => (SearchItemType::Mopub, MOPUB_PREFERRED_POSITION),
            other => {
                // 词表外的横幅仍要占一个渲染槽：降级为 regular 而不是拒绝注入。
                debug_assert!(false, "unsupported banner kind: {}", other);
                tracing::warn!("unsupported banner kind {}, falling back to regular slot", other);
                (SearchItemType::Regular, 0)
            }
        };

        index.add_item(item, preferred_position, slot);
    }

    /// 按槽位读取横幅。槽位必须来自先前成功的 `add`（越界即 panic）。
    pub fn get(&self, slot: usize) -> &Banner {
        &self.banners[slot]
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    /// 插入序遍历
    pub fn iter(&self) -> impl Iterator<Item = &Banner> {
        self.banners.iter()
    }
}

impl Drop for BannerRegistry {
    fn drop(&mut self) {
        for banner in &self.banners {
            self.tracker.banner_out_of_screen(banner);
        }
    }
}
