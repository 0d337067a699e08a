#![no_main]

use libfuzzer_sys::fuzz_target;

use deskcalc_core::{AngleUnit, Evaluator};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Arbitrary text must either evaluate to a number or fail cleanly.
    for unit in [AngleUnit::Radians, AngleUnit::Degrees] {
        let _ = Evaluator::new(unit).evaluate(text);
    }
});
