#![no_main]

use gofront_syntax::location::PathInterner;
use gofront_syntax::parser;
use gofront_syntax::source::MemorySource;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Raw bytes, including invalid UTF-8, go straight to the decoder
    let mut interner = PathInterner::new();
    let parsed = parser::parse_file(MemorySource::new(data).with_path("fuzz.go"), &mut interner);
    for diagnostic in parsed.diagnostics.iter() {
        assert!(diagnostic.location.line >= 1);
    }
});
