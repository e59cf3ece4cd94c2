//! Trait composition
//!
//! Every operation takes a descriptor by reference and returns a new one; the
//! input is never modified. A request's modifications are applied as a
//! left-to-right fold, so later steps win wherever two steps touch the same
//! field.

use std::fmt;
use std::str::FromStr;

use crate::attributes::{AttributeSet, CaseSelector, NumberSpacing, SymbolicTraits};
use crate::descriptor::Descriptor;
use crate::error::FontError;
use crate::style::{Design, Weight};

/// Set the weight value. Leaves the symbolic traits alone.
pub fn apply_weight(d: &Descriptor, weight: Weight) -> Descriptor {
    Descriptor {
        weight: Some(weight),
        ..d.clone()
    }
}

/// Shorthand for `apply_weight(d, Weight::Bold)`
pub fn apply_bold(d: &Descriptor) -> Descriptor {
    apply_weight(d, Weight::Bold)
}

/// Add the bold symbolic trait without touching the weight value.
///
/// This is the second representation of bold; [`reconcile_weight`] folds it
/// into the weight value before the descriptor reaches a provider.
pub fn apply_bold_trait(d: &Descriptor) -> Descriptor {
    apply_traits(d, SymbolicTraits::BOLD)
}

/// Union `traits` into the descriptor's symbolic traits
pub fn apply_traits(d: &Descriptor, traits: SymbolicTraits) -> Descriptor {
    Descriptor {
        traits: d.traits | traits,
        ..d.clone()
    }
}

pub fn apply_italic(d: &Descriptor) -> Descriptor {
    apply_traits(d, SymbolicTraits::ITALIC)
}

/// Add the monospace trait. Independent of monospaced digits.
pub fn apply_monospace(d: &Descriptor) -> Descriptor {
    apply_traits(d, SymbolicTraits::MONOSPACE)
}

/// Request fixed-width numerals. Does not touch the symbolic traits.
pub fn apply_monospaced_digits(d: &Descriptor) -> Descriptor {
    let attributes = d
        .attributes
        .merge(AttributeSet::new().with_number_spacing(NumberSpacing::Monospaced));
    Descriptor {
        attributes,
        ..d.clone()
    }
}

/// Add small caps for the given letter case(s).
///
/// The new selection is unioned with the existing one, so lowercase then
/// uppercase and uppercase then lowercase both end at `BothSmallCaps`.
pub fn apply_small_caps(d: &Descriptor, which: CaseSelector) -> Descriptor {
    let selector = d.attributes.case_selector().union(which);
    let attributes = d
        .attributes
        .merge(AttributeSet::new().with_case_selector(selector));
    Descriptor {
        attributes,
        ..d.clone()
    }
}

pub fn apply_lowercase_small_caps(d: &Descriptor) -> Descriptor {
    apply_small_caps(d, CaseSelector::LowerSmallCaps)
}

pub fn apply_uppercase_small_caps(d: &Descriptor) -> Descriptor {
    apply_small_caps(d, CaseSelector::UpperSmallCaps)
}

/// Both cases in small caps: lowercase step then uppercase step
pub fn apply_all_small_caps(d: &Descriptor) -> Descriptor {
    apply_uppercase_small_caps(&apply_lowercase_small_caps(d))
}

/// Replace the design variant
pub fn apply_design(d: &Descriptor, design: Design) -> Descriptor {
    Descriptor {
        design,
        ..d.clone()
    }
}

/// Collapse the two representations of bold into one.
///
/// The weight value is the source of truth. A bold trait only takes effect
/// when no weight was set, in which case it becomes `Weight::Bold`. The trait
/// is always removed so a provider cannot apply bold twice.
pub fn reconcile_weight(d: &Descriptor) -> Descriptor {
    if !d.traits.contains(SymbolicTraits::BOLD) {
        return d.clone();
    }
    Descriptor {
        weight: d.weight.or(Some(Weight::Bold)),
        traits: d.traits - SymbolicTraits::BOLD,
        ..d.clone()
    }
}

/// One styling step of a font request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modification {
    Weight(Weight),
    Bold,
    /// Bold expressed as a symbolic trait rather than a weight
    BoldTrait,
    Italic,
    Monospace,
    MonospacedDigits,
    SmallCaps,
    LowercaseSmallCaps,
    UppercaseSmallCaps,
    Design(Design),
}

impl Modification {
    pub fn apply(self, d: &Descriptor) -> Descriptor {
        match self {
            Modification::Weight(weight) => apply_weight(d, weight),
            Modification::Bold => apply_bold(d),
            Modification::BoldTrait => apply_bold_trait(d),
            Modification::Italic => apply_italic(d),
            Modification::Monospace => apply_monospace(d),
            Modification::MonospacedDigits => apply_monospaced_digits(d),
            Modification::SmallCaps => apply_all_small_caps(d),
            Modification::LowercaseSmallCaps => apply_lowercase_small_caps(d),
            Modification::UppercaseSmallCaps => apply_uppercase_small_caps(d),
            Modification::Design(design) => apply_design(d, design),
        }
    }
}

/// Apply `modifications` in order, starting from `base`
pub fn fold<'a, I>(base: &Descriptor, modifications: I) -> Descriptor
where
    I: IntoIterator<Item = &'a Modification>,
{
    modifications.into_iter().fold(base.clone(), |acc, m| {
        tracing::trace!(modification = %m, "applying modification");
        m.apply(&acc)
    })
}

impl fmt::Display for Modification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modification::Weight(weight) => write!(f, "weight({})", weight),
            Modification::Bold => f.write_str("bold"),
            Modification::BoldTrait => f.write_str("boldTrait"),
            Modification::Italic => f.write_str("italic"),
            Modification::Monospace => f.write_str("monospace"),
            Modification::MonospacedDigits => f.write_str("monospacedDigits"),
            Modification::SmallCaps => f.write_str("smallCaps"),
            Modification::LowercaseSmallCaps => f.write_str("lowercaseSmallCaps"),
            Modification::UppercaseSmallCaps => f.write_str("uppercaseSmallCaps"),
            Modification::Design(design) => write!(f, "design({})", design),
        }
    }
}

impl FromStr for Modification {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((name, rest)) = s.split_once('(') {
            let arg = rest
                .strip_suffix(')')
                .ok_or_else(|| FontError::UnknownModification(s.to_string()))?;
            return match name.trim() {
                "weight" => Ok(Modification::Weight(arg.parse()?)),
                "design" => Ok(Modification::Design(arg.parse()?)),
                _ => Err(FontError::UnknownModification(s.to_string())),
            };
        }
        match s {
            "bold" => Ok(Modification::Bold),
            "boldTrait" => Ok(Modification::BoldTrait),
            "italic" => Ok(Modification::Italic),
            "monospace" | "monospaced" => Ok(Modification::Monospace),
            "monospacedDigits" | "monospacedDigit" => Ok(Modification::MonospacedDigits),
            "smallCaps" => Ok(Modification::SmallCaps),
            "lowercaseSmallCaps" => Ok(Modification::LowercaseSmallCaps),
            "uppercaseSmallCaps" => Ok(Modification::UppercaseSmallCaps),
            _ => Err(FontError::UnknownModification(s.to_string())),
        }
    }
}

/// Parse a comma or whitespace separated list of modifications
pub fn parse_modifications(input: &str) -> Result<Vec<Modification>, FontError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FontReference, SizingMode};
    use crate::style::TextStyle;
    use rand::Rng;

    fn body() -> Descriptor {
        Descriptor::new(
            FontReference::SystemStyle(TextStyle::Body),
            SizingMode::scalable(TextStyle::Body, 17.0).unwrap(),
        )
        .unwrap()
    }

    const ALL_MODIFICATIONS: [Modification; 12] = [
        Modification::Weight(Weight::Light),
        Modification::Weight(Weight::Black),
        Modification::Bold,
        Modification::BoldTrait,
        Modification::Italic,
        Modification::Monospace,
        Modification::MonospacedDigits,
        Modification::SmallCaps,
        Modification::LowercaseSmallCaps,
        Modification::UppercaseSmallCaps,
        Modification::Design(Design::Serif),
        Modification::Design(Design::Rounded),
    ];

    fn random_descriptor(rng: &mut impl Rng) -> Descriptor {
        let len = rng.random_range(0..8);
        let mods: Vec<Modification> = (0..len)
            .map(|_| ALL_MODIFICATIONS[rng.random_range(0..ALL_MODIFICATIONS.len())])
            .collect();
        fold(&body(), &mods)
    }

    #[test]
    fn test_operations_do_not_mutate_input() {
        let d = body();
        let before = d.clone();
        let _ = apply_italic(&d);
        let _ = apply_weight(&d, Weight::Heavy);
        let _ = apply_all_small_caps(&d);
        assert_eq!(d, before);
    }

    #[test]
    fn test_weight_does_not_touch_bold_trait() {
        let d = apply_weight(&body(), Weight::Bold);
        assert_eq!(d.weight(), Some(Weight::Bold));
        assert!(!d.traits().contains(SymbolicTraits::BOLD));

        let d = apply_bold_trait(&body());
        assert_eq!(d.weight(), None);
        assert!(d.traits().contains(SymbolicTraits::BOLD));
    }

    #[test]
    fn test_idempotence() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let d = random_descriptor(&mut rng);
            assert_eq!(apply_italic(&apply_italic(&d)), apply_italic(&d));
            assert_eq!(apply_monospace(&apply_monospace(&d)), apply_monospace(&d));
            assert_eq!(apply_all_small_caps(&apply_all_small_caps(&d)), apply_all_small_caps(&d));
            assert_eq!(
                apply_monospaced_digits(&apply_monospaced_digits(&d)),
                apply_monospaced_digits(&d)
            );
        }
    }

    #[test]
    fn test_small_caps_order_does_not_matter() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let d = random_descriptor(&mut rng);
            let lower_then_upper = apply_uppercase_small_caps(&apply_lowercase_small_caps(&d));
            let upper_then_lower = apply_lowercase_small_caps(&apply_uppercase_small_caps(&d));
            assert_eq!(lower_then_upper, upper_then_lower);
            assert_eq!(lower_then_upper.attributes().case_selector(), CaseSelector::BothSmallCaps);
            assert_eq!(lower_then_upper, apply_all_small_caps(&d));
        }
    }

    #[test]
    fn test_monospace_and_monospaced_digits_are_distinct() {
        let trait_only = apply_monospace(&body());
        assert!(trait_only.traits().contains(SymbolicTraits::MONOSPACE));
        assert_eq!(trait_only.attributes().number_spacing(), NumberSpacing::Default);

        let digits_only = apply_monospaced_digits(&body());
        assert!(digits_only.traits().is_empty());
        assert_eq!(digits_only.attributes().number_spacing(), NumberSpacing::Monospaced);

        let both = apply_monospaced_digits(&trait_only);
        assert!(both.traits().contains(SymbolicTraits::MONOSPACE));
        assert_eq!(both.attributes().number_spacing(), NumberSpacing::Monospaced);
    }

    #[test]
    fn test_monospace_keeps_italic() {
        let d = apply_monospace(&apply_italic(&body()));
        assert_eq!(d.traits(), SymbolicTraits::ITALIC | SymbolicTraits::MONOSPACE);
    }

    #[test]
    fn test_design_is_total_replacement() {
        let d = apply_design(&apply_design(&body(), Design::Serif), Design::Rounded);
        assert_eq!(d.design(), Design::Rounded);
        // design is not a symbolic trait
        let d = apply_design(&body(), Design::Monospaced);
        assert!(!d.traits().contains(SymbolicTraits::MONOSPACE));
    }

    #[test]
    fn test_later_weight_wins() {
        let d = fold(
            &body(),
            &[Modification::Weight(Weight::Light), Modification::Bold],
        );
        assert_eq!(d.weight(), Some(Weight::Bold));
        let d = fold(
            &body(),
            &[Modification::Bold, Modification::Weight(Weight::Light)],
        );
        assert_eq!(d.weight(), Some(Weight::Light));
    }

    #[test]
    fn test_reconcile_bold_trait_without_weight() {
        let weight_path = reconcile_weight(&apply_weight(&body(), Weight::Bold));
        let trait_path = reconcile_weight(&apply_bold_trait(&body()));
        assert_eq!(weight_path.weight(), Some(Weight::Bold));
        assert_eq!(trait_path.weight(), Some(Weight::Bold));
        assert!(!trait_path.traits().contains(SymbolicTraits::BOLD));
        assert_eq!(weight_path, trait_path);
    }

    #[test]
    fn test_reconcile_weight_value_wins_over_trait() {
        for order in [
            [Modification::Weight(Weight::Light), Modification::BoldTrait],
            [Modification::BoldTrait, Modification::Weight(Weight::Light)],
        ] {
            let d = reconcile_weight(&fold(&body(), &order));
            assert_eq!(d.weight(), Some(Weight::Light));
            assert!(!d.traits().contains(SymbolicTraits::BOLD));
            assert!(d.validate().is_ok());
        }
    }

    #[test]
    fn test_reconcile_never_double_bolds() {
        let d = reconcile_weight(&fold(&body(), &[Modification::Bold, Modification::BoldTrait]));
        assert_eq!(d.weight(), Some(Weight::Bold));
        assert!(d.traits().is_empty());
        assert_eq!(reconcile_weight(&d), d);
    }

    #[test]
    fn test_reconciled_descriptors_always_validate() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let d = reconcile_weight(&random_descriptor(&mut rng));
            assert!(d.validate().is_ok());
        }
    }

    #[test]
    fn test_modification_parsing() {
        assert_eq!("italic".parse::<Modification>(), Ok(Modification::Italic));
        assert_eq!(
            "weight(semibold)".parse::<Modification>(),
            Ok(Modification::Weight(Weight::Semibold))
        );
        assert_eq!(
            "design(rounded)".parse::<Modification>(),
            Ok(Modification::Design(Design::Rounded))
        );
        assert!(matches!(
            "weight(enormous)".parse::<Modification>(),
            Err(FontError::UnknownWeight(_))
        ));
        assert!(matches!(
            "strikethrough".parse::<Modification>(),
            Err(FontError::UnknownModification(_))
        ));
        assert!("weight(bold".parse::<Modification>().is_err());
    }

    #[test]
    fn test_modification_display_parses_back() {
        for m in ALL_MODIFICATIONS {
            assert_eq!(m.to_string().parse::<Modification>(), Ok(m));
        }
    }

    #[test]
    fn test_parse_modification_list() {
        let mods = parse_modifications("italic, weight(bold) smallCaps").unwrap();
        assert_eq!(
            mods,
            vec![
                Modification::Italic,
                Modification::Weight(Weight::Bold),
                Modification::SmallCaps,
            ]
        );
        assert!(parse_modifications("").unwrap().is_empty());
    }
}
