#![no_main]

use libfuzzer_sys::fuzz_target;
use model_version::ModelVersion;

fuzz_target!(|data: &str| {
    if let Ok(Some(version)) = ModelVersion::parse(data) {
        let reparsed = ModelVersion::parse(&version.to_string());
        assert_eq!(reparsed, Ok(Some(version)));
    }
});
