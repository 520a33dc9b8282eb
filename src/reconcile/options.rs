#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ReconcileError;
use crate::types::property_key::PropertyKey;

/// Which non-positional keys take part in the reconciliation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropertyInclusion {
    /// Positional items only.
    #[default]
    Off,
    /// The union of both sides' keys, in insertion order, each visited once.
    Discover,
    /// Exactly these keys, in this order.
    Keys(Vec<PropertyKey>),
}

/// Tuning knobs for [`reconcile`](crate::reconcile).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Replace the edit-script result with a naive row-by-row comparison
    /// whenever the latter has no more conflicts. Defaults to `true`.
    pub fallback_to_item_by_item_diff: bool,
    /// Defaults to [`PropertyInclusion::Off`].
    pub include_non_numerical_properties: PropertyInclusion,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            fallback_to_item_by_item_diff: true,
            include_non_numerical_properties: PropertyInclusion::default(),
        }
    }
}

/// What arrived in the options position.
///
/// Earlier releases accepted a bare boolean or key list there; those calls
/// still have a representation so that they can be rejected with an error
/// explaining the current convention, rather than being silently
/// misinterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsInput {
    Settings(ReconcileOptions),
    LegacyFlag(bool),
    LegacyKeys(Vec<PropertyKey>),
}

impl OptionsInput {
    pub(crate) fn into_options(self) -> Result<ReconcileOptions, ReconcileError> {
        match self {
            OptionsInput::Settings(options) => Ok(options),
            OptionsInput::LegacyFlag(_) => Err(ReconcileError::InvalidOptions {
                received: "boolean",
            }),
            OptionsInput::LegacyKeys(_) => Err(ReconcileError::InvalidOptions {
                received: "property key list",
            }),
        }
    }
}

impl From<ReconcileOptions> for OptionsInput {
    fn from(options: ReconcileOptions) -> Self { OptionsInput::Settings(options) }
}

impl From<bool> for OptionsInput {
    fn from(flag: bool) -> Self { OptionsInput::LegacyFlag(flag) }
}

impl From<Vec<PropertyKey>> for OptionsInput {
    fn from(keys: Vec<PropertyKey>) -> Self { OptionsInput::LegacyKeys(keys) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let options = ReconcileOptions::default();
        assert!(options.fallback_to_item_by_item_diff);
        assert_eq!(
            options.include_non_numerical_properties,
            PropertyInclusion::Off
        );
    }

    #[test]
    fn test_settings_pass_through() {
        let options = ReconcileOptions::default();
        assert_eq!(
            OptionsInput::from(options.clone()).into_options(),
            Ok(options)
        );
    }

    #[test]
    fn test_legacy_boolean_is_rejected_with_guidance() {
        let error = OptionsInput::from(true).into_options().unwrap_err();
        assert_eq!(
            error,
            ReconcileError::InvalidOptions {
                received: "boolean"
            }
        );
        assert!(error.to_string().contains("include_non_numerical_properties"));
    }

    #[test]
    fn test_legacy_key_list_is_rejected() {
        let keys: Vec<PropertyKey> = vec!["foo".into(), "bar".into()];
        assert_eq!(
            OptionsInput::from(keys).into_options(),
            Err(ReconcileError::InvalidOptions {
                received: "property key list"
            })
        );
    }
}
