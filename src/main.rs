use std::sync::{Arc, Weak};

use search_banners::core::{Banner, BannerKind, BannerRegistry};
use search_banners::index::{MergedIndex, ResultIndex};
use search_banners::stats::SessionReport;
use search_banners::visibility::VisibilityLog;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting search-banners demo session");

    // 一页 5 条自然结果，注入两条 mopub 横幅
    let index = Arc::new(MergedIndex::new(5));
    let tracker = Arc::new(VisibilityLog::default());
    let index_dyn: Arc<dyn ResultIndex> = index.clone();
    let weak_index: Weak<dyn ResultIndex> = Arc::downgrade(&index_dyn);
    let mut registry = BannerRegistry::new(weak_index, tracker.clone());

    for (id, kind) in [("search:mopub:01", "mopub"), ("search:mopub:02", "mopub")] {
        registry.add(Banner::new(id, kind.parse::<BannerKind>()?));
    }

    index.build();
    println!("{}", serde_json::to_string_pretty(&index.layout())?);

    let report = SessionReport::collect(&registry, &tracker);
    println!("{report}");

    // 会话结束：Drop 触发移出屏幕上报
    drop(registry);
    info!(
        "session closed, {} banner(s) reported out of screen",
        tracker.off_screen_total()
    );

    Ok(())
}
