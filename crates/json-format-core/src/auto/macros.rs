/// Implements [`AutoJson`](crate::AutoJson) for a struct with named fields.
///
/// Fields are written in the order listed. A field can be renamed with
/// `as "name"` and limited to a set of views with `in [VIEW, ...]`. Fields
/// whose type has an absent value (`Option<T>`) may be missing from the input.
///
/// ```
/// use json_format_core::{json_record, View};
///
/// const INTERNAL: View = View::new("internal");
///
/// #[derive(Debug, PartialEq)]
/// struct Account {
///     id: u64,
///     display_name: String,
///     secret: Option<String>,
/// }
///
/// json_record!(Account {
///     id,
///     display_name as "displayName",
///     secret in [INTERNAL],
/// });
/// ```
#[macro_export]
macro_rules! json_record {
    (@key $field:ident) => {
        stringify!($field)
    };
    (@key $field:ident $key:literal) => {
        $key
    };
    ($ty:ident { $($field:ident $(as $key:literal)? $(in [$($view:path),+])?),* $(,)? }) => {
        impl $crate::AutoJson for $ty {
            fn shape() -> $crate::Shape {
                $crate::Shape::Record(stringify!($ty))
            }

            fn encode<J: $crate::Json>(&self, enc: &$crate::Encoder<'_, J>) -> J::Node {
                enc.record()
                    $(
                        .field_in(
                            $crate::json_record!(@key $field $($key)?),
                            &self.$field,
                            &[$($($view),+)?],
                        )
                    )*
                    .finish()
            }

            fn decode<J: $crate::Json>(dec: &$crate::Decoder<'_, J>) -> $crate::Result<Self> {
                let mut record = dec.record::<Self>()?;
                let value = $ty {
                    $(
                        $field: record.field_in(
                            $crate::json_record!(@key $field $($key)?),
                            &[$($($view),+)?],
                        )?,
                    )*
                };
                record.finish()?;
                Ok(value)
            }
        }
    };
}

/// Implements [`AutoJson`](crate::AutoJson) for a fieldless enum, carried as
/// one string per variant.
///
/// ```
/// use json_format_core::json_enum;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Role {
///     Admin,
///     Member,
/// }
///
/// json_enum!(Role {
///     Admin => "admin",
///     Member => "member",
/// });
/// ```
#[macro_export]
macro_rules! json_enum {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $crate::AutoJson for $ty {
            fn shape() -> $crate::Shape {
                $crate::Shape::Enum(stringify!($ty))
            }

            fn encode<J: $crate::Json>(&self, enc: &$crate::Encoder<'_, J>) -> J::Node {
                let name = match self {
                    $($ty::$variant => $name,)+
                };
                enc.json().string(Some(name))
            }

            fn decode<J: $crate::Json>(dec: &$crate::Decoder<'_, J>) -> $crate::Result<Self> {
                dec.expect::<Self>($crate::JsonType::String)?;
                match dec.text().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(dec.mismatch::<Self>()),
                }
            }
        }
    };
}
