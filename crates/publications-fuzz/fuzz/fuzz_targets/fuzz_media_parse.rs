#![no_main]

use libfuzzer_sys::fuzz_target;
use publications_page::models::{SortYear, parse_media};

fuzz_target!(|data: &str| {
    for item in parse_media(data) {
        assert!(!item.label.is_empty());
    }
    let _ = SortYear::extract(data);
});
