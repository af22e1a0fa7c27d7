use core::fmt;

/// The category of a CBOR item, held in the 3 high bits of its leading byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MajorType {
    Unsigned = 0,
    Negative = 1,
    Bytes = 2,
    Text = 3,
    Array = 4,
    Map = 5,
    Tag = 6,
    Simple = 7,
}

impl MajorType {
    /// Split the major type out of an item's leading byte.
    pub fn from_initial_byte(b: u8) -> Self {
        match b >> 5 {
            0 => Self::Unsigned,
            1 => Self::Negative,
            2 => Self::Bytes,
            3 => Self::Text,
            4 => Self::Array,
            5 => Self::Map,
            6 => Self::Tag,
            _ => Self::Simple,
        }
    }

    /// The major type bits, already shifted into position for OR-ing into a head byte.
    pub fn bits(self) -> u8 {
        (self as u8) << 5
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Self::Unsigned => "Unsigned Integer",
            Self::Negative => "Negative Integer",
            Self::Bytes => "Byte String",
            Self::Text => "Text String",
            Self::Array => "Array",
            Self::Map => "Map",
            Self::Tag => "Tag",
            Self::Simple => "Simple Value",
        }
    }
}

impl fmt::Display for MajorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
