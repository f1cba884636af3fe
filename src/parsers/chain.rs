use crate::models::ChainId;

/// Chain-name fragments tested in order; the first hit wins. Keep the
/// ordering stable: a name could contain more than one fragment.
const CHAIN_RULES: &[(&str, ChainId)] = &[
    ("TOHOシネマズ", ChainId::Toho),
    ("MOVIX", ChainId::Movix),
    ("イオンシネマ", ChainId::Aeon),
    ("ジョイ", ChainId::Tjoy),
    ("ユナイテッド", ChainId::United),
];

/// Map a free-text theater name to its cinema chain. Unknown names fall
/// back to `ChainId::Other`, which selects the generic scraping path.
pub fn classify(theater_name: &str) -> ChainId {
    CHAIN_RULES
        .iter()
        .find(|(fragment, _)| theater_name.contains(fragment))
        .map(|(_, chain)| *chain)
        .unwrap_or(ChainId::Other)
}
