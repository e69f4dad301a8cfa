/// How the decoder treats the value marker of an Object property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectValueMarkers {
    /// Only Number, Boolean and String property values are accepted.
    #[default]
    Strict,
    /// Number, Boolean and String are decoded as usual. Any other marker is
    /// read as a length-prefixed string, for encoders that write property
    /// values without checking types.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    pub object_value_markers: ObjectValueMarkers,
    /// Log when the 3-byte tail of an Array is not an object end marker.
    pub warn_on_array_tail: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            object_value_markers: ObjectValueMarkers::Strict,
            warn_on_array_tail: true,
        }
    }
}

impl DecoderConfig {
    pub fn lenient() -> Self {
        Self {
            object_value_markers: ObjectValueMarkers::Lenient,
            ..Default::default()
        }
    }
}
