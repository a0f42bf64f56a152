#![no_main]

use libfuzzer_sys::fuzz_target;
use publications_page::models::RowPolicy;
use publications_page::{Catalog, config::PageOptions, formatters, reader};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the whole pipeline; errors are fine, panics are not
    let Ok(records) = reader::read_rows(data) else { return };
    if let Ok(catalog) = Catalog::build(records, RowPolicy::Skip) {
        let _ = formatters::render_page(&catalog, &PageOptions::default());
    }
});
