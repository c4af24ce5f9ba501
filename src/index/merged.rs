use parking_lot::RwLock;
use serde::Serialize;

use crate::core::banner::SearchItemType;
use crate::index::ResultIndex;

/// 合并视图中的一行：条目类型 + 源容器下标
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IndexRow {
    pub item: SearchItemType,
    pub container_index: usize,
}

#[derive(Default)]
struct IndexState {
    /// 自然结果行（保持结果容器顺序）
    organic: Vec<IndexRow>,
    /// 挂入的横幅条目：(期望位置, 行)，到达序
    slotted: Vec<(usize, IndexRow)>,
    /// build 产物
    rows: Vec<IndexRow>,
}

/// 合并索引：自然结果 + 横幅位的最终展示顺序。
///
/// 与屏幕共享（Arc），因此内部用读写锁做内部可变性；注册表只通过
/// `ResultIndex` 弱引用上报条目。
pub struct MergedIndex {
    state: RwLock<IndexState>,
}

impl MergedIndex {
    /// 以本页自然结果数量初始化，每行指向结果容器中的同位条目。
    pub fn new(results_count: usize) -> Self {
        let organic = (0..results_count)
            .map(|i| IndexRow {
                item: SearchItemType::Regular,
                container_index: i,
            })
            .collect();
        Self {
            state: RwLock::new(IndexState {
                organic,
                slotted: Vec::new(),
                rows: Vec::new(),
            }),
        }
    }

    /// 计算最终行序。
    ///
    /// 自然结果保持相对顺序；横幅条目按期望位置稳定排序后依次插入
    /// `min(期望位置 + 已插入数, 行数)`：同位并列保持到达序，越界钉到尾部。
    pub fn build(&self) {
        let mut st = self.state.write();
        let mut slotted = st.slotted.clone();
        slotted.sort_by_key(|(pos, _)| *pos);

        let mut rows = st.organic.clone();
        for (rank, (pos, row)) in slotted.into_iter().enumerate() {
            let at = (pos + rank).min(rows.len());
            rows.insert(at, row);
        }
        st.rows = rows;
    }

    pub fn row_count(&self) -> usize {
        self.state.read().rows.len()
    }

    /// build 之后按行读取
    pub fn row(&self, at: usize) -> IndexRow {
        self.state.read().rows[at]
    }

    /// build 之后的布局快照（序列化 / 调试用）
    pub fn layout(&self) -> Vec<IndexRow> {
        self.state.read().rows.clone()
    }
}

impl ResultIndex for MergedIndex {
    fn add_item(&self, item: SearchItemType, preferred_position: usize, container_index: usize) {
        let mut st = self.state.write();
        st.slotted.push((
            preferred_position,
            IndexRow {
                item,
                container_index,
            },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_places_slotted_row_at_preferred_position() {
        let index = MergedIndex::new(4);
        index.add_item(SearchItemType::Mopub, 2, 0);
        index.build();

        assert_eq!(index.row_count(), 5);
        assert_eq!(
            index.row(2),
            IndexRow {
                item: SearchItemType::Mopub,
                container_index: 0,
            }
        );
        assert_eq!(index.row(0).item, SearchItemType::Regular);
        assert_eq!(index.row(4).container_index, 3);
    }

    #[test]
    fn build_clamps_position_past_tail() {
        let index = MergedIndex::new(1);
        index.add_item(SearchItemType::Mopub, 5, 0);
        index.build();

        assert_eq!(index.row_count(), 2);
        assert_eq!(index.row(1).item, SearchItemType::Mopub);
    }

    #[test]
    fn equal_positions_keep_arrival_order() {
        let index = MergedIndex::new(3);
        index.add_item(SearchItemType::Mopub, 2, 0);
        index.add_item(SearchItemType::Mopub, 2, 1);
        index.build();

        let layout = index.layout();
        assert_eq!(layout[2].container_index, 0);
        assert_eq!(layout[3].container_index, 1);
    }
}
