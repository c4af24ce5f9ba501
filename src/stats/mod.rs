use std::fmt;

use crate::core::banner::BannerKind;
use crate::core::registry::BannerRegistry;
use crate::visibility::VisibilityLog;

/// 会话横幅报表（调试输出）
#[derive(Clone, Debug, Default)]
pub struct SessionReport {
    /// 注册表当前持有的横幅数
    pub held: usize,
    /// mopub 横幅数
    pub mopub: usize,
    /// 词表外回退的横幅数
    pub other: usize,
    /// 追踪器累计移出屏幕上报数
    pub off_screen_total: u64,
}

impl SessionReport {
    pub fn collect(registry: &BannerRegistry, log: &VisibilityLog) -> Self {
        let mut report = SessionReport {
            held: registry.len(),
            off_screen_total: log.off_screen_total(),
            ..SessionReport::default()
        };
        for banner in registry.iter() {
            match banner.kind() {
                BannerKind::Mopub => report.mopub += 1,
                _ => report.other += 1,
            }
        }
        report
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔════════════════════════════╗")?;
        writeln!(f, "║   Session Banner Report    ║")?;
        writeln!(f, "╠════════════════════════════╣")?;
        writeln!(f, "║ {:<12}{:>14} ║", "held:", self.held)?;
        writeln!(f, "║ {:<12}{:>14} ║", "mopub:", self.mopub)?;
        writeln!(f, "║ {:<12}{:>14} ║", "other:", self.other)?;
        writeln!(f, "║ {:<12}{:>14} ║", "off screen:", self.off_screen_total)?;
        write!(f, "╚════════════════════════════╝")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::banner::{Banner, SearchItemType};
    use crate::index::ResultIndex;
    use std::sync::Arc;

    struct NullIndex;

    impl ResultIndex for NullIndex {
        fn add_item(&self, _item: SearchItemType, _preferred_position: usize, _container_index: usize) {}
    }

    #[test]
    fn report_counts_held_banners_by_kind() {
        let index: Arc<dyn ResultIndex> = Arc::new(NullIndex);
        let log = Arc::new(VisibilityLog::default());
        let mut registry = BannerRegistry::new(Arc::downgrade(&index), log.clone());

        registry.add(Banner::new("m0", BannerKind::Mopub));
        registry.add(Banner::new("m1", BannerKind::Mopub));

        let report = SessionReport::collect(&registry, &log);
        assert_eq!(report.held, 2);
        assert_eq!(report.mopub, 2);
        assert_eq!(report.other, 0);
        assert_eq!(report.off_screen_total, 0);
    }
}
