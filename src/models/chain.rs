use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainId {
    Toho,
    Movix,
    Aeon,
    Tjoy,
    United,
    Other,
}

impl ChainId {
    pub fn key(&self) -> &'static str {
        match self {
            ChainId::Toho => "toho",
            ChainId::Movix => "movix",
            ChainId::Aeon => "aeon",
            ChainId::Tjoy => "tjoy",
            ChainId::United => "united",
            ChainId::Other => "other",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "toho" => Some(ChainId::Toho),
            "movix" => Some(ChainId::Movix),
            "aeon" => Some(ChainId::Aeon),
            "tjoy" => Some(ChainId::Tjoy),
            "united" => Some(ChainId::United),
            "other" => Some(ChainId::Other),
            _ => None,
        }
    }
}
