use bytes::{BufMut, Bytes, BytesMut};

use crate::{EncodingError, amf0::*};

/// Encode `text` as a 16-bit big-endian UTF-8 byte length followed by the
/// UTF-8 bytes. No type marker is written.
pub fn string_to_buffer(text: &str) -> Result<Bytes, EncodingError> {
    let mut encoder = Amf0EncoderState::new(BytesMut::with_capacity(2 + text.len()));
    encoder.put_utf8(text)?;
    Ok(encoder.finish())
}

/// Encode a String or Number value together with its type marker.
///
/// Any other variant is rejected with [`EncodingError::InvalidInput`].
pub fn scalar_to_buffer(value: &Amf0Value) -> Result<Bytes, EncodingError> {
    let mut encoder = Amf0EncoderState::default();
    encoder.put_scalar(value)?;
    Ok(encoder.finish())
}

/// Encode an Object whose property values are all Strings or Numbers.
pub fn flat_object_to_buffer(properties: &Properties) -> Result<Bytes, EncodingError> {
    let mut encoder = Amf0EncoderState::default();
    encoder.buf.put_u8(OBJECT);
    for (key, value) in properties.iter() {
        encoder.put_utf8(key)?;
        encoder.put_scalar(value)?;
    }
    encoder.put_object_end();
    Ok(encoder.finish())
}

pub fn concat<B: AsRef<[u8]>>(buffers: &[B]) -> Bytes {
    let total_len = buffers.iter().map(|b| b.as_ref().len()).sum();
    let mut buf = BytesMut::with_capacity(total_len);
    for b in buffers {
        buf.put_slice(b.as_ref());
    }
    buf.freeze()
}

/// Encode a sequence of values of any supported type.
///
/// Object and Array properties must be Numbers, Booleans or Strings.
pub fn encode_amf0_values(amf_values: &[Amf0Value]) -> Result<Bytes, EncodingError> {
    let encoder = Amf0EncoderState::default();
    encoder.encode_values(amf_values)
}

#[derive(Default)]
struct Amf0EncoderState {
    buf: BytesMut,
}

impl Amf0EncoderState {
    fn new(buf: BytesMut) -> Self {
        Self { buf }
    }

    fn finish(self) -> Bytes {
        self.buf.freeze()
    }

    fn encode_values(mut self, amf_values: &[Amf0Value]) -> Result<Bytes, EncodingError> {
        for value in amf_values {
            self.encode_value(value)?;
        }
        Ok(self.finish())
    }

    fn encode_value(&mut self, value: &Amf0Value) -> Result<(), EncodingError> {
        match value {
            Amf0Value::Number(n) => self.put_number(*n),
            Amf0Value::Boolean(b) => self.put_bool(*b),
            Amf0Value::String(s) => self.put_string(s)?,
            Amf0Value::Object(props) => self.put_object(props)?,
            Amf0Value::Null => self.put_null(),
            Amf0Value::Array(props) => self.put_array(props)?,
        };
        Ok(())
    }

    fn put_scalar(&mut self, value: &Amf0Value) -> Result<(), EncodingError> {
        match value {
            Amf0Value::Number(n) => self.put_number(*n),
            Amf0Value::String(s) => self.put_string(s)?,
            other => return Err(EncodingError::InvalidInput(other.type_name())),
        };
        Ok(())
    }

    fn put_property_value(&mut self, value: &Amf0Value) -> Result<(), EncodingError> {
        match value {
            Amf0Value::Number(n) => self.put_number(*n),
            Amf0Value::Boolean(b) => self.put_bool(*b),
            Amf0Value::String(s) => self.put_string(s)?,
            other => return Err(EncodingError::InvalidInput(other.type_name())),
        };
        Ok(())
    }

    fn put_number(&mut self, n: f64) {
        self.buf.put_u8(NUMBER);
        self.buf.put_f64(n);
    }

    fn put_bool(&mut self, b: bool) {
        self.buf.put_u8(BOOLEAN);
        self.buf.put_u8(b.into());
    }

    fn put_string(&mut self, s: &str) -> Result<(), EncodingError> {
        self.buf.put_u8(STRING);
        self.put_utf8(s)
    }

    fn put_utf8(&mut self, s: &str) -> Result<(), EncodingError> {
        let len = u16::try_from(s.len()).map_err(|_| EncodingError::StringTooLong(s.len()))?;
        self.buf.put_u16(len);
        self.buf.put_slice(s.as_bytes());
        Ok(())
    }

    fn put_object(&mut self, props: &Properties) -> Result<(), EncodingError> {
        self.buf.put_u8(OBJECT);
        self.put_keyval_list(props)
    }

    fn put_null(&mut self) {
        self.buf.put_u8(NULL);
    }

    fn put_array(&mut self, props: &Properties) -> Result<(), EncodingError> {
        let count =
            u32::try_from(props.len()).map_err(|_| EncodingError::ArrayTooLong(props.len()))?;
        self.buf.put_u8(ARRAY);
        self.buf.put_u32(count);
        self.put_keyval_list(props)
    }

    fn put_keyval_list(&mut self, props: &Properties) -> Result<(), EncodingError> {
        for (key, value) in props.iter() {
            self.put_utf8(key)?;
            self.put_property_value(value)?;
        }
        self.put_object_end();
        Ok(())
    }

    fn put_object_end(&mut self) {
        self.buf.put_slice(&OBJECT_END_MARKER);
    }
}
