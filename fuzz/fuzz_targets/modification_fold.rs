#![no_main]
use libfuzzer_sys::fuzz_target;

use typeface::dummy_provider::DummyProvider;
use typeface::{
    Design, FontRequest, FontResolver, FontSource, Modification, SymbolicTraits, TextStyle, Weight,
};

fn modification(byte: u8) -> Modification {
    match byte % 10 {
        0 => Modification::Weight(Weight::ALL[(byte / 10) as usize % Weight::ALL.len()]),
        1 => Modification::Bold,
        2 => Modification::BoldTrait,
        3 => Modification::Italic,
        4 => Modification::Monospace,
        5 => Modification::MonospacedDigits,
        6 => Modification::SmallCaps,
        7 => Modification::LowercaseSmallCaps,
        8 => Modification::UppercaseSmallCaps,
        _ => Modification::Design(match byte / 10 % 4 {
            0 => Design::Default,
            1 => Design::Serif,
            2 => Design::Rounded,
            _ => Design::Monospaced,
        }),
    }
}

fn source(selector: u8, size: u8) -> FontSource {
    let points = f32::from(size.max(1));
    match selector % 4 {
        0 => FontSource::system_style(TextStyle::ALL[size as usize % TextStyle::ALL.len()], None),
        1 => FontSource::system_size(points, None, None),
        2 => FontSource::custom_fixed("Present", points),
        _ => FontSource::custom("Missing", points),
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // Limit input size to prevent timeouts
    let data = if data.len() > 4096 { &data[..4096] } else { data };

    let request = FontRequest {
        source: source(data[0], data[1]),
        modifications: data[2..].iter().copied().map(modification).collect(),
    };

    let resolver = FontResolver::new(
        DummyProvider::new().with_custom_font_traits("Present", SymbolicTraits::BOLD),
    );

    let first = resolver.prepare(&request).expect("valid request must prepare");
    let second = resolver.prepare(&request).expect("valid request must prepare");
    assert_eq!(first, second, "prepare must be deterministic");

    // Bold is always carried by the weight value once composed
    assert!(!first.descriptor.traits().contains(SymbolicTraits::BOLD));

    let last_weight = request.modifications.iter().rev().find_map(|m| match m {
        Modification::Weight(w) => Some(*w),
        Modification::Bold => Some(Weight::Bold),
        _ => None,
    });
    if let Some(weight) = last_weight {
        assert_eq!(first.descriptor.weight(), Some(weight));
    }

    let font = resolver.materialize(first).expect("dummy provider materializes everything");
    let missing = matches!(&request.source, FontSource::Custom { name, .. } if name == "Missing");
    assert_eq!(font.used_fallback, missing);
});
