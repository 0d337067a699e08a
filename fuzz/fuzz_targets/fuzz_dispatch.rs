#![no_main]

use libfuzzer_sys::fuzz_target;

use deskcalc_core::{layout, Calculator, MemoryStore, Mode};

// Every label any mode can dispatch, plus the mode tabs themselves.
fn label_table() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = Vec::new();
    for mode in Mode::ALL {
        for &label in layout::layout(mode) {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
    }
    labels
}

fuzz_target!(|data: &[u8]| {
    let labels = label_table();
    let mut calc = Calculator::new(Box::new(MemoryStore::new()));

    for &byte in data {
        // High bits pick a mode switch now and then; the rest press buttons.
        match byte {
            0xFD => calc.set_mode(Mode::General),
            0xFE => calc.set_mode(Mode::Scientific),
            0xFF => calc.set_mode(Mode::Business),
            _ => {
                let label = labels[usize::from(byte) % labels.len()];
                let _ = calc.press_label(label);
            }
        }

        // Invariants that must hold after every press.
        assert!(calc.history().len() <= deskcalc_core::HISTORY_CAPACITY);
        if calc.buffer().is_empty() {
            assert!(calc.display() == "0" || calc.display() == "Error");
        } else {
            assert_eq!(calc.display(), calc.buffer());
        }
    }
});
