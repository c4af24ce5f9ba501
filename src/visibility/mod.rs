use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::core::banner::Banner;

/// recent 窗口上限：只为诊断保留尾部一小段
const RECENT_CAP: usize = 64;

/// 可见性追踪抽象：横幅移出屏幕时上报（fire-and-forget，无返回值）。
///
/// 进程级共享服务，由构造方显式注入而不是全局单例，测试可替换假实现。
pub trait VisibilityTracker: Send + Sync {
    fn banner_out_of_screen(&self, banner: &Banner);
}

/// 默认追踪器：计数 + 结构化日志 + 近期 id 窗口。
#[derive(Default)]
pub struct VisibilityLog {
    off_screen_total: AtomicU64,
    recent: Mutex<Vec<String>>,
}

impl VisibilityLog {
    pub fn off_screen_total(&self) -> u64 {
        self.off_screen_total.load(Ordering::Relaxed)
    }

    pub fn recent(&self) -> Vec<String> {
        self.recent.lock().clone()
    }
}

impl VisibilityTracker for VisibilityLog {
    fn banner_out_of_screen(&self, banner: &Banner) {
        self.off_screen_total.fetch_add(1, Ordering::Relaxed);

        let mut recent = self.recent.lock();
        if recent.len() >= RECENT_CAP {
            recent.remove(0);
        }
        recent.push(banner.id().to_string());

        tracing::debug!("banner {} ({}) out of screen", banner.id(), banner.kind());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::banner::BannerKind;

    #[test]
    fn log_counts_and_keeps_recent_ids_in_order() {
        let log = VisibilityLog::default();
        log.banner_out_of_screen(&Banner::new("b0", BannerKind::Mopub));
        log.banner_out_of_screen(&Banner::new("b1", BannerKind::Facebook));

        assert_eq!(log.off_screen_total(), 2);
        assert_eq!(log.recent(), vec!["b0".to_string(), "b1".to_string()]);
    }

    #[test]
    fn recent_window_is_bounded() {
        let log = VisibilityLog::default();
        for i in 0..(RECENT_CAP + 8) {
            log.banner_out_of_screen(&Banner::new(format!("b{}", i), BannerKind::Mopub));
        }

        let recent = log.recent();
        assert_eq!(recent.len(), RECENT_CAP);
        assert_eq!(recent.last().unwrap(), &format!("b{}", RECENT_CAP + 7));
        assert_eq!(log.off_screen_total(), (RECENT_CAP + 8) as u64);
    }
}
