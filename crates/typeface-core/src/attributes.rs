//! Font feature toggles and symbolic traits
//!
//! Both types are closed value sets: every combination that can be built is a
//! valid one, so nothing here returns an error.

use bitflags::bitflags;

/// Small-caps selection for lowercase and/or uppercase letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseSelector {
    #[default]
    None,
    LowerSmallCaps,
    UpperSmallCaps,
    BothSmallCaps,
}

impl CaseSelector {
    fn from_parts(lower: bool, upper: bool) -> Self {
        match (lower, upper) {
            (false, false) => CaseSelector::None,
            (true, false) => CaseSelector::LowerSmallCaps,
            (false, true) => CaseSelector::UpperSmallCaps,
            (true, true) => CaseSelector::BothSmallCaps,
        }
    }

    /// Whether lowercase letters render as small capitals
    pub fn lower(self) -> bool {
        matches!(self, CaseSelector::LowerSmallCaps | CaseSelector::BothSmallCaps)
    }

    /// Whether uppercase letters render as small capitals
    pub fn upper(self) -> bool {
        matches!(self, CaseSelector::UpperSmallCaps | CaseSelector::BothSmallCaps)
    }

    /// Combine two selections. Order-independent and idempotent.
    pub fn union(self, other: CaseSelector) -> Self {
        Self::from_parts(self.lower() || other.lower(), self.upper() || other.upper())
    }
}

/// Numeral spacing selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberSpacing {
    #[default]
    Default,
    Monospaced,
}

/// One OpenType feature toggle derived from an [`AttributeSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureSetting {
    /// 4-character feature tag (e.g. "smcp", "tnum")
    pub tag: [u8; 4],
    pub value: u32,
}

impl FeatureSetting {
    pub const fn on(tag: [u8; 4]) -> Self {
        Self { tag, value: 1 }
    }

    pub fn tag_string(&self) -> String {
        String::from_utf8_lossy(&self.tag).to_string()
    }
}

/// Feature tags emitted by [`AttributeSet::features`]
pub mod feature_tags {
    pub const LOWER_SMALL_CAPS: [u8; 4] = *b"smcp";
    pub const UPPER_SMALL_CAPS: [u8; 4] = *b"c2sc";
    pub const TABULAR_NUMBERS: [u8; 4] = *b"tnum";
}

/// Feature toggles attached to a descriptor.
///
/// Each field is `None` until some step touches it. [`AttributeSet::merge`]
/// is a field-wise override: a field set in the later operand replaces the
/// earlier one, untouched fields are kept. Merge is therefore NOT commutative
/// in general; it only commutes when the operands touch disjoint fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttributeSet {
    case_selector: Option<CaseSelector>,
    number_spacing: Option<NumberSpacing>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_selector(mut self, selector: CaseSelector) -> Self {
        self.case_selector = Some(selector);
        self
    }

    pub fn with_number_spacing(mut self, spacing: NumberSpacing) -> Self {
        self.number_spacing = Some(spacing);
        self
    }

    /// Effective case selector (`None` when never touched)
    pub fn case_selector(&self) -> CaseSelector {
        self.case_selector.unwrap_or_default()
    }

    /// Effective numeral spacing (`Default` when never touched)
    pub fn number_spacing(&self) -> NumberSpacing {
        self.number_spacing.unwrap_or_default()
    }

    /// Field-wise override, `later` wins for every field it touched
    pub fn merge(self, later: AttributeSet) -> AttributeSet {
        AttributeSet {
            case_selector: later.case_selector.or(self.case_selector),
            number_spacing: later.number_spacing.or(self.number_spacing),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.case_selector() == CaseSelector::None
            && self.number_spacing() == NumberSpacing::Default
    }

    /// OpenType feature settings the provider should enable
    pub fn features(&self) -> Vec<FeatureSetting> {
        let mut features = Vec::new();
        let case = self.case_selector();
        if case.lower() {
            features.push(FeatureSetting::on(feature_tags::LOWER_SMALL_CAPS));
        }
        if case.upper() {
            features.push(FeatureSetting::on(feature_tags::UPPER_SMALL_CAPS));
        }
        if self.number_spacing() == NumberSpacing::Monospaced {
            features.push(FeatureSetting::on(feature_tags::TABULAR_NUMBERS));
        }
        features
    }
}

bitflags! {
    /// Symbolic traits of a font.
    ///
    /// Design variant is a separate descriptor dimension and never appears
    /// here. `BOLD` exists so bold-as-a-trait can be represented, but the
    /// resolver folds it into the weight value before materialization.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SymbolicTraits: u8 {
        const ITALIC = 0b001;
        const MONOSPACE = 0b010;
        const BOLD = 0b100;
    }
}
