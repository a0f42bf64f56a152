#![no_main]

use libfuzzer_sys::fuzz_target;
use publications_page::formatters::format_abstract;

fuzz_target!(|data: &str| {
    // Unbalanced `$` and emphasis markers must not panic on slicing
    let _ = format_abstract(data);
});
