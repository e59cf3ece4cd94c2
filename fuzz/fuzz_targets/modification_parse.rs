#![no_main]
use libfuzzer_sys::fuzz_target;

use typeface::{parse_modifications, FontError};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if input.len() > 4096 {
        return;
    }

    match parse_modifications(input) {
        Ok(modifications) => {
            // Display output must parse back to the same list
            let text = modifications
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            assert_eq!(parse_modifications(&text), Ok(modifications));
        }
        Err(FontError::UnknownModification(_))
        | Err(FontError::UnknownWeight(_))
        | Err(FontError::UnknownDesign(_)) => {}
        Err(other) => panic!("unexpected parse error: {}", other),
    }
});
