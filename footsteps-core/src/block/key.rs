use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{Block, BlockState};

/// Specificity of a [`BlockStateKey`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyVariant {
    /// Any state of a block without sub-types
    NoSubtype,
    /// One sub-type of a block with sub-types
    Subtype(String),
    /// Any sub-type of a block with sub-types
    Generic,
    /// Exact non-variant properties (`age=3,...`). On blocks with sub-types
    /// the variant property is listed too when the rule targets one sub-type.
    Special(String),
}

/// Lookup key for acoustic tables.
///
/// Built per lookup from a [`BlockState`]; lookups relax from the specific key
/// to [`as_generic`](Self::as_generic) and then the [`special_keys`](Self::special_keys).
/// Identity is the block name plus the variant; the remaining fields only
/// describe which relaxations apply.
#[derive(Debug, Clone)]
pub struct BlockStateKey {
    block: Arc<str>,
    variant: KeyVariant,
    has_subtypes: bool,
    special: Option<String>,
    subtype_special: Option<String>,
}

impl BlockStateKey {
    /// Most specific key of a state
    pub fn of(state: &BlockState) -> Self {
        let block = state.block();
        let variant = match block.variant_property() {
            Some(prop) => KeyVariant::Subtype(state.property(prop).unwrap_or_default().to_string()),
            None => KeyVariant::NoSubtype,
        };
        let special = canonical_properties(state, block.variant_property());
        let subtype_special = special
            .as_ref()
            .and_then(|_| block.variant_property())
            .and_then(|_| canonical_properties(state, None));
        Self {
            block: block.shared_name(),
            variant,
            has_subtypes: block.has_subtypes(),
            special,
            subtype_special,
        }
    }

    /// Key matching every state of `block` (generic for blocks with sub-types)
    pub fn block_wide(block: &Block) -> Self {
        let variant = if block.has_subtypes() {
            KeyVariant::Generic
        } else {
            KeyVariant::NoSubtype
        };
        Self {
            block: block.shared_name(),
            variant,
            has_subtypes: block.has_subtypes(),
            special: None,
            subtype_special: None,
        }
    }

    /// Key selecting the non-variant properties of `state` across every
    /// sub-type. Falls back to [`of`](Self::of) when the state has none.
    pub fn property_key(state: &BlockState) -> Self {
        let key = Self::of(state);
        if key.special.is_none() {
            key
        } else {
            key.as_special()
        }
    }

    /// Key selecting the non-variant properties of `state` within its own
    /// sub-type only
    pub fn subtype_property_key(state: &BlockState) -> Self {
        let key = Self::of(state);
        match &key.subtype_special {
            Some(all) => key.with_variant(KeyVariant::Special(all.clone())),
            None => key,
        }
    }

    pub fn block(&self) -> &str {
        &self.block
    }

    pub fn variant(&self) -> &KeyVariant {
        &self.variant
    }

    pub fn has_subtypes(&self) -> bool {
        self.has_subtypes
    }

    pub fn has_special_meta(&self) -> bool {
        self.special.is_some()
    }

    pub fn as_generic(&self) -> Self {
        self.with_variant(KeyVariant::Generic)
    }

    pub fn as_special(&self) -> Self {
        self.with_variant(KeyVariant::Special(self.special.clone().unwrap_or_default()))
    }

    /// Special keys in lookup order: the sub-type qualified one first
    pub fn special_keys(&self) -> impl Iterator<Item = Self> + '_ {
        let qualified = self
            .subtype_special
            .as_ref()
            .map(|all| self.with_variant(KeyVariant::Special(all.clone())));
        qualified.into_iter().chain(self.special.is_some().then(|| self.as_special()))
    }

    fn with_variant(&self, variant: KeyVariant) -> Self {
        Self {
            block: Arc::clone(&self.block),
            variant,
            has_subtypes: self.has_subtypes,
            special: None,
            subtype_special: None,
        }
    }
}

impl PartialEq for BlockStateKey {
    fn eq(&self, other: &Self) -> bool {
        self.block == other.block && self.variant == other.variant
    }
}

impl Eq for BlockStateKey {}

impl Hash for BlockStateKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.block.hash(state);
        self.variant.hash(state);
    }
}

/// `k=v,...` over the state's properties, skipping `skip`; `None` when empty
fn canonical_properties(state: &BlockState, skip: Option<&str>) -> Option<String> {
    let pairs: Vec<String> = state
        .properties()
        .iter()
        .filter(|(k, _)| Some(k.as_str()) != skip)
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    (!pairs.is_empty()).then(|| pairs.join(","))
}
