//! Annotation flag sets.
//!
//! Route-like services annotate legs with any combination of six
//! attributes; the table service with durations, distances or both.

use std::ops::{BitOr, BitOrAssign};

use kairo_dynamic::DynamicValue;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

macro_rules! annotation_flags {
    ($(#[$meta:meta])* $name:ident { $($flag:ident = $bit:expr, $text:literal;)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(u8);

        impl $name {
            pub const NONE: Self = $name(0);
            $(pub const $flag: Self = $name($bit);)+
            pub const ALL: Self = $name(0 $(| $bit)+);

            const NAMES: &'static [(&'static str, Self)] = &[$(($text, Self::$flag),)+];

            pub fn from_name(name: &str) -> Option<Self> {
                Self::NAMES
                    .iter()
                    .find(|(candidate, _)| *candidate == name)
                    .map(|(_, flag)| *flag)
            }

            pub fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            pub fn is_empty(self) -> bool {
                self.0 == 0
            }

            pub fn bits(self) -> u8 {
                self.0
            }

            /// Names of the flags that are set, in declaration order.
            pub fn names(self) -> impl Iterator<Item = &'static str> {
                Self::NAMES
                    .iter()
                    .filter(move |(_, flag)| self.contains(*flag))
                    .map(|(name, _)| *name)
            }
        }

        impl BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                $name(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let names = self.names().collect::<Vec<_>>();
                let mut seq = serializer.serialize_seq(Some(names.len()))?;
                for name in names {
                    seq.serialize_element(name)?;
                }
                seq.end()
            }
        }
    };
}

annotation_flags! {
    /// Per-segment attributes attached to route legs.
    AnnotationsType {
        DURATION = 0x01, "duration";
        NODES = 0x02, "nodes";
        DISTANCE = 0x04, "distance";
        WEIGHT = 0x08, "weight";
        DATASOURCES = 0x10, "datasources";
        SPEED = 0x20, "speed";
    }
}

annotation_flags! {
    /// Matrices computed by the table service.
    TableAnnotations {
        DURATION = 0x01, "duration";
        DISTANCE = 0x02, "distance";
    }
}

/// Route-like `annotations`: `true` selects every attribute, `false` none,
/// and an array ORs the named attributes together.
pub(crate) fn route_annotations(value: &DynamicValue) -> Result<AnnotationsType> {
    if let Some(enabled) = value.as_bool() {
        return Ok(if enabled {
            AnnotationsType::ALL
        } else {
            AnnotationsType::NONE
        });
    }

    let names = value.as_array().ok_or(Error::UnsupportedAnnotations)?;
    names.iter().try_fold(AnnotationsType::NONE, |flags, name| {
        name.as_str()
            .and_then(AnnotationsType::from_name)
            .map(|flag| flags | flag)
            .ok_or(Error::UnsupportedAnnotations)
    })
}

pub(crate) fn table_annotations(value: &DynamicValue) -> Result<TableAnnotations> {
    let names = value.as_array().ok_or(Error::TableAnnotationsNotArray)?;
    names.iter().try_fold(TableAnnotations::NONE, |flags, name| {
        name.as_str()
            .and_then(TableAnnotations::from_name)
            .map(|flag| flags | flag)
            .ok_or(Error::UnsupportedAnnotations)
    })
}
