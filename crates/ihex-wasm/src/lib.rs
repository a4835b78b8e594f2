use ihex_core::{records, EncoderConfig, Record};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format!($($t)*)))
}

/// JS-facing view of one record: the rendered line plus its fields.
#[derive(Debug, Serialize)]
pub struct WasmRecord {
    pub line: String,
    #[serde(flatten)]
    pub record: Record,
}

impl From<Record> for WasmRecord {
    fn from(record: Record) -> Self {
        Self {
            line: record.to_string(),
            record,
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Encodes `data` at `start_address` and returns the newline-terminated
/// Intel HEX text.
#[wasm_bindgen]
pub fn encode_hex(start_address: u32, data: &[u8]) -> String {
    collect_records(&EncoderConfig::default(), start_address, data)
        .iter()
        .fold(String::new(), |mut text, record| {
            text.push_str(&record.line);
            text.push('\n');
            text
        })
}

/// Encodes `data` at `start_address` with `record_len`-byte data records and
/// returns an array of record objects.
#[wasm_bindgen]
pub fn encode_records(
    start_address: u32,
    data: &[u8],
    record_len: u8,
) -> Result<JsValue, JsValue> {
    let config = EncoderConfig::with_record_len(record_len)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let encoded = collect_records(&config, start_address, data);
    console_log!("Encoded {} bytes into {} records", data.len(), encoded.len());
    Ok(serde_wasm_bindgen::to_value(&encoded)?)
}

fn collect_records(config: &EncoderConfig, start_address: u32, data: &[u8]) -> Vec<WasmRecord> {
    records(config, start_address, data)
        .map(WasmRecord::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_hex_joins_lines() {
        assert_eq!(
            encode_hex(0, &[0x01, 0x02, 0x03]),
            ":03000000010203F7\n:00000001FF\n"
        );
        assert_eq!(encode_hex(0x0001_0000, &[]), ":00000001FF\n");
    }

    #[test]
    fn record_view_serializes_line_and_fields() {
        let encoded = collect_records(&EncoderConfig::default(), 0x0001_0000, &[0xAB]);
        let json = serde_json::to_value(&encoded).unwrap();

        assert_eq!(json[0]["line"], ":020000040001F9");
        assert_eq!(json[0]["record_type"], "ExtendedLinearAddress");
        assert_eq!(json[1]["line"], ":01000000AB54");
        assert_eq!(json[1]["address"], 0);
        assert_eq!(json[1]["payload"], serde_json::json!([0xAB]));
        assert_eq!(json[2]["record_type"], "EndOfFile");
    }

    #[test]
    fn host_supplied_values_are_validated() {
        assert!(serde_json::from_str::<EncoderConfig>(r#"{"record_len":0}"#).is_err());
        assert!(serde_json::from_str::<EncoderConfig>(r#"{"record_len":33}"#).is_err());

        let oversized = serde_json::json!({
            "address": 0,
            "record_type": "Data",
            "payload": vec![0u8; 256],
        });
        assert!(serde_json::from_value::<Record>(oversized).is_err());
    }
}
