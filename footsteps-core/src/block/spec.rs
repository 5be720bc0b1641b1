use std::str::FromStr;

use super::{Block, BlockStateKey};
use crate::constants::DEFAULT_NAMESPACE;
use crate::error::RegisterError;

/// Sub-type selector of a registration key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtypeFilter {
    /// `*`: every sub-type
    Any,
    /// `red`: one value of the block's variant property
    Value(String),
    /// `age=3,half=top`: exact properties applied to the default state
    Properties(Vec<(String, String)>),
}

/// Parsed registration key: `namespace:name[:filter][+extra]`.
///
/// ```
/// use footsteps_core::block::{BlockSpec, SubtypeFilter};
///
/// let spec: BlockSpec = "minecraft:wool:red+carpet".parse().unwrap();
/// assert_eq!(spec.name, "minecraft:wool");
/// assert_eq!(spec.filter, Some(SubtypeFilter::Value("red".into())));
/// assert_eq!(spec.extra.as_deref(), Some("carpet"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    pub name: String,
    pub filter: Option<SubtypeFilter>,
    pub extra: Option<String>,
}

impl FromStr for BlockSpec {
    type Err = RegisterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || RegisterError::MalformedKey(raw.to_string());
        let raw_trimmed = raw.trim();

        let (body, extra) = match raw_trimmed.split_once('+') {
            Some((body, extra)) => {
                let extra = extra.trim();
                if extra.is_empty() {
                    return Err(malformed());
                }
                (body, Some(extra.to_string()))
            }
            None => (raw_trimmed, None),
        };

        let parts: Vec<&str> = body.split(':').map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(malformed());
        }
        let (name, filter) = match parts.as_slice() {
            [path] => (format!("{DEFAULT_NAMESPACE}:{path}"), None),
            [namespace, path] => (format!("{namespace}:{path}"), None),
            [namespace, path, filter] => (
                format!("{namespace}:{path}"),
                Some(parse_filter(filter).ok_or_else(malformed)?),
            ),
            _ => return Err(malformed()),
        };

        Ok(Self {
            name,
            filter,
            extra,
        })
    }
}

fn parse_filter(raw: &str) -> Option<SubtypeFilter> {
    if raw == "*" {
        return Some(SubtypeFilter::Any);
    }
    if !raw.contains('=') {
        return Some(SubtypeFilter::Value(raw.to_string()));
    }
    raw.split(',')
        .map(|pair| {
            let (k, v) = pair.split_once('=')?;
            let (k, v) = (k.trim(), v.trim());
            (!k.is_empty() && !v.is_empty()).then(|| (k.to_string(), v.to_string()))
        })
        .collect::<Option<Vec<_>>>()
        .map(SubtypeFilter::Properties)
}

impl BlockSpec {
    /// Table key this spec registers under for `block`
    pub fn key_for(&self, block: &std::sync::Arc<Block>) -> Result<BlockStateKey, RegisterError> {
        match &self.filter {
            None | Some(SubtypeFilter::Any) => Ok(BlockStateKey::block_wide(block)),
            Some(SubtypeFilter::Value(value)) => {
                let property = block.variant_property().ok_or_else(|| {
                    RegisterError::UnknownProperty {
                        block: self.name.clone(),
                        property: "<variant>".to_string(),
                        value: value.clone(),
                    }
                })?;
                let state = block.default_state().with_property(property, value).ok_or_else(|| {
                    RegisterError::UnknownProperty {
                        block: self.name.clone(),
                        property: property.to_string(),
                        value: value.clone(),
                    }
                })?;
                Ok(BlockStateKey::of(&state))
            }
            Some(SubtypeFilter::Properties(pairs)) => {
                let mut state = block.default_state();
                for (property, value) in pairs {
                    state = state.with_property(property, value).ok_or_else(|| {
                        RegisterError::UnknownProperty {
                            block: self.name.clone(),
                            property: property.clone(),
                            value: value.clone(),
                        }
                    })?;
                }
                let named_variant = block
                    .variant_property()
                    .map_or(0, |variant| pairs.iter().filter(|(property, _)| property == variant).count());
                Ok(match (named_variant, pairs.len()) {
                    (0, _) => BlockStateKey::property_key(&state),
                    (named, total) if named == total => BlockStateKey::of(&state),
                    _ => BlockStateKey::subtype_property_key(&state),
                })
            }
        }
    }
}
