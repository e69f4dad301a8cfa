use bytes::{Buf, Bytes};
use tracing::{debug, trace, warn};

use crate::{DecodingError, amf0::*};

/// Smallest encoded Array property: empty key, marker and a boolean.
const MIN_ARRAY_PROPERTY_SIZE: usize = 4;

/// Decode AMF0 encoded messages.
///
/// `amf_bytes` must include whole AMF0 values, e.g. a full payload of an RTMP
/// Data or Command message. Either every value is decoded or an error is
/// returned.
pub fn decode_amf0_values(amf_bytes: &[u8]) -> Result<Vec<Amf0Value>, DecodingError> {
    decode_amf0_values_with_config(amf_bytes, DecoderConfig::default())
}

pub fn decode_amf0_values_with_config(
    amf_bytes: &[u8],
    config: DecoderConfig,
) -> Result<Vec<Amf0Value>, DecodingError> {
    let decoder = Amf0DecoderState::new(Bytes::copy_from_slice(amf_bytes), config);
    decoder.decode_buf()
}

struct Amf0DecoderState {
    buf: Bytes,
    total_len: usize,
    config: DecoderConfig,
}

impl Amf0DecoderState {
    fn new(amf_bytes: Bytes, config: DecoderConfig) -> Self {
        Self {
            total_len: amf_bytes.len(),
            buf: amf_bytes,
            config,
        }
    }

    fn offset(&self) -> usize {
        self.total_len - self.buf.remaining()
    }

    fn decode_buf(mut self) -> Result<Vec<Amf0Value>, DecodingError> {
        let mut amf_values = vec![];
        while self.buf.has_remaining() {
            amf_values.push(self.decode_value()?);
        }
        debug!(
            values = amf_values.len(),
            bytes = self.total_len,
            "Decoded AMF0 payload"
        );
        Ok(amf_values)
    }

    fn decode_value(&mut self) -> Result<Amf0Value, DecodingError> {
        let offset = self.offset();
        let marker = self.decode_marker()?;
        trace!(offset, marker, "Decoding AMF0 value");

        let amf_value = match marker {
            NUMBER => Amf0Value::Number(self.decode_number()?),
            BOOLEAN => Amf0Value::Boolean(self.decode_boolean()?),
            STRING => Amf0Value::String(self.decode_string()?),
            OBJECT => Amf0Value::Object(self.decode_object(offset)?),
            NULL => Amf0Value::Null,
            ARRAY => Amf0Value::Array(self.decode_array()?),
            _ => return Err(DecodingError::UnsupportedMarker { offset, marker }),
        };
        Ok(amf_value)
    }

    fn ensure_remaining(&self, needed: usize) -> Result<(), DecodingError> {
        let remaining = self.buf.remaining();
        if remaining < needed {
            return Err(DecodingError::InsufficientData {
                offset: self.offset(),
                needed,
                remaining,
            });
        }
        Ok(())
    }

    fn decode_marker(&mut self) -> Result<u8, DecodingError> {
        self.ensure_remaining(1)?;
        Ok(self.buf.get_u8())
    }

    fn decode_number(&mut self) -> Result<f64, DecodingError> {
        self.ensure_remaining(8)?;
        Ok(self.buf.get_f64())
    }

    fn decode_boolean(&mut self) -> Result<bool, DecodingError> {
        self.ensure_remaining(1)?;
        Ok(self.buf.get_u8() != 0)
    }

    fn decode_string(&mut self) -> Result<String, DecodingError> {
        self.ensure_remaining(2)?;
        let size = self.buf.get_u16() as usize;
        self.ensure_remaining(size)?;

        let offset = self.offset();
        let string_bytes = self.buf.split_to(size);
        String::from_utf8(string_bytes.to_vec())
            .map_err(|_| DecodingError::InvalidUtf8 { offset })
    }

    fn decode_object(&mut self, object_offset: usize) -> Result<Properties, DecodingError> {
        let mut properties = Properties::new();

        loop {
            if self.buf.remaining() < OBJECT_END_MARKER.len() {
                return Err(DecodingError::MissingObjectEnd {
                    offset: object_offset,
                });
            }
            if self.buf[..OBJECT_END_MARKER.len()] == OBJECT_END_MARKER {
                self.buf.advance(OBJECT_END_MARKER.len());
                return Ok(properties);
            }

            let key = self.decode_string()?;
            let value = self.decode_object_property()?;
            properties.insert(key, value);
        }
    }

    fn decode_object_property(&mut self) -> Result<Amf0Value, DecodingError> {
        let offset = self.offset();
        let marker = self.decode_marker()?;

        let value = match (marker, self.config.object_value_markers) {
            (NUMBER, _) => Amf0Value::Number(self.decode_number()?),
            (STRING, _) => Amf0Value::String(self.decode_string()?),
            (BOOLEAN, _) => Amf0Value::Boolean(self.decode_boolean()?),
            (_, ObjectValueMarkers::Lenient) => {
                warn!(
                    offset,
                    marker,
                    "Unsupported Object property marker, reading it as String."
                );
                Amf0Value::String(self.decode_string()?)
            }
            (_, ObjectValueMarkers::Strict) => {
                return Err(DecodingError::UnsupportedMarker { offset, marker });
            }
        };
        Ok(value)
    }

    fn decode_array(&mut self) -> Result<Properties, DecodingError> {
        self.ensure_remaining(4)?;
        let count = self.buf.get_u32() as usize;
        let capacity = count.min(self.buf.remaining() / MIN_ARRAY_PROPERTY_SIZE);
        let mut properties = Properties::with_capacity(capacity);

        for _ in 0..count {
            let key = self.decode_string()?;
            let value = self.decode_array_property()?;
            properties.insert(key, value);
        }

        // The tail is normally an object end marker, but its content is not
        // enforced.
        let tail_offset = self.offset();
        self.ensure_remaining(OBJECT_END_MARKER.len())?;
        let tail = self.buf.split_to(OBJECT_END_MARKER.len());
        if self.config.warn_on_array_tail && tail[..] != OBJECT_END_MARKER {
            warn!(
                offset = tail_offset,
                tail = ?&tail[..],
                "Array does not end with an object end marker."
            );
        }

        Ok(properties)
    }

    fn decode_array_property(&mut self) -> Result<Amf0Value, DecodingError> {
        let offset = self.offset();
        let marker = self.decode_marker()?;

        let value = match marker {
            NUMBER => Amf0Value::Number(self.decode_number()?),
            STRING => Amf0Value::String(self.decode_string()?),
            BOOLEAN => Amf0Value::Boolean(self.decode_boolean()?),
            _ => return Err(DecodingError::UnsupportedMarker { offset, marker }),
        };
        Ok(value)
    }
}
