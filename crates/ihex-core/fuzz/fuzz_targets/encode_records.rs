#![no_main]

use ihex_core::{records, EncoderConfig, RecordType, MAX_DATA_RECORD_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }

    let start = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    let record_len = data[4] % MAX_DATA_RECORD_LEN + 1;
    let Ok(config) = EncoderConfig::with_record_len(record_len) else {
        return;
    };
    let block = &data[5..];

    let mut payload_bytes = 0usize;
    let mut eof_seen = false;
    for record in records(&config, start, block) {
        assert!(!eof_seen, "record after end-of-file");

        let line = record.to_string();
        let sum = (1..line.len())
            .step_by(2)
            .filter_map(|i| u8::from_str_radix(&line[i..i + 2], 16).ok())
            .fold(0u8, u8::wrapping_add);
        assert_eq!(sum, 0, "checksum mismatch in {line}");

        match record.record_type() {
            RecordType::Data => {
                assert!(record.byte_count() <= record_len);
                payload_bytes += record.payload().len();
            }
            RecordType::EndOfFile => eof_seen = true,
            RecordType::ExtendedLinearAddress => assert_eq!(record.byte_count(), 2),
        }
    }

    assert!(eof_seen);
    assert_eq!(payload_bytes, block.len());
});
