#![no_main]
use libfuzzer_sys::fuzz_target;

use file_list::walk::pattern::NamePattern;

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let Ok(pattern) = std::str::from_utf8(rest) else {
        return;
    };
    // Translation must either compile or fail cleanly, never panic.
    if let Ok(p) = NamePattern::new(pattern, flags & 1 != 0, flags & 2 != 0) {
        let _ = p.matches(rest);
    }
});
