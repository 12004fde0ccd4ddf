#![no_main]

use libfuzzer_sys::fuzz_target;
use ttir_sync::mapping::parse_text;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let result = parse_text(text);
        for (ir_line, sources) in result.mapping.forward_entries() {
            for source in sources {
                assert!(result.lookup_backward(*source).contains(&ir_line));
            }
        }
    }
});
