use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 横幅来源网络（广告栈下发的判别标签）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Mopub,
    Facebook,
    Rb,
}

impl BannerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerKind::Mopub => "mopub",
            BannerKind::Facebook => "facebook",
            BannerKind::Rb => "rb",
        }
    }
}

impl fmt::Display for BannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 广告配置下发的 kind 不在词表内
#[derive(Debug, thiserror::Error)]
#[error("unknown banner kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for BannerKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mopub" => Ok(BannerKind::Mopub),
            "facebook" => Ok(BannerKind::Facebook),
            "rb" => Ok(BannerKind::Rb),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// 上报给结果索引的条目类型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchItemType {
    Regular,
    Mopub,
}

/// 横幅条目。内容与加载生命周期由外部广告栈负责，这里只读判别字段。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Banner {
    id: String,
    kind: BannerKind,
}

impl Banner {
    pub fn new(id: impl Into<String>, kind: BannerKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> BannerKind {
        self.kind
    }
}
