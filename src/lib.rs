pub mod amf0;
pub mod error;

pub use amf0::{
    Amf0Value, DecoderConfig, ObjectValueMarkers, Properties,
    decoding::{decode_amf0_values, decode_amf0_values_with_config},
    encoding::{
        concat, encode_amf0_values, flat_object_to_buffer, scalar_to_buffer, string_to_buffer,
    },
};
pub use error::{DecodingError, EncodingError};
