//! Component type registry.

use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use weave_core::DecodingError;
use weave_core::contracts::{ComponentDecoding, DecodeFn};

/// A decoder that dispatches on registered component type names.
#[derive(Default)]
pub struct ComponentDecoder {
    types: RwLock<HashMap<String, DecodeFn>>,
}

impl ComponentDecoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered type names, sorted.
    pub fn registered_types(&self) -> Vec<String> {
        let mut names: Vec<_> = self.types.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl ComponentDecoding for ComponentDecoder {
    fn register(&self, type_name: &str, decode: DecodeFn) {
        self.types.write().insert(type_name.to_owned(), decode);
    }

    fn is_registered(&self, type_name: &str) -> bool {
        self.types.read().contains_key(type_name)
    }

    fn decode(
        &self,
        type_name: &str,
        data: &[u8],
    ) -> Result<Box<dyn Any + Send + Sync>, DecodingError> {
        // Release the lock before running user code.
        let decode = self
            .types
            .read()
            .get(type_name)
            .cloned()
            .ok_or_else(|| DecodingError::UnknownType(type_name.to_owned()))?;
        decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn utf8_text() -> DecodeFn {
        Arc::new(|data: &[u8]| {
            String::from_utf8(data.to_vec())
                .map(|text| Box::new(text) as Box<dyn Any + Send + Sync>)
                .map_err(|e| DecodingError::Malformed {
                    type_name: "text".into(),
                    reason: e.to_string(),
                })
        })
    }

    #[test]
    fn test_decode_registered_type() {
        let decoder = ComponentDecoder::new();
        decoder.register("text", utf8_text());

        let decoded = decoder.decode("text", b"hello").expect("registered type decodes");
        assert_eq!(decoded.downcast_ref::<String>().map(String::as_str), Some("hello"));
        assert!(decoder.is_registered("text"));
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let decoder = ComponentDecoder::new();
        let result = decoder.decode("button", b"{}");
        assert!(matches!(result, Err(DecodingError::UnknownType(name)) if name == "button"));
    }

    #[test]
    fn test_malformed_payload_is_reported() {
        let decoder = ComponentDecoder::new();
        decoder.register("text", utf8_text());
        assert!(matches!(
            decoder.decode("text", &[0xff, 0xfe]),
            Err(DecodingError::Malformed { .. })
        ));
        assert_eq!(decoder.registered_types(), vec!["text".to_owned()]);
    }
}
