//! Schema-driven field access and projection for weather records.
//!
//! Each record type ([`crate::WeatherData`], [`crate::Day`], [`crate::Hour`]) is declared
//! through the `weather_record!` macro, which emits the struct together with a static table
//! of [`FieldDescriptor`]s: one entry per field holding its wire name, its declared
//! [`FieldType`] and plain function pointers to read, write and copy it. All dynamic access
//! goes through that table, so reading or writing a field by name is a lookup rather than a
//! hand-written accessor per field.

use crate::access::error::AccessError;
use crate::access::field::{FieldKind, FieldType, FieldValue};

/// Describes one field of a record type `R`.
pub struct FieldDescriptor<R: 'static> {
    /// The field's JSON wire name (e.g. `"tempmax"`, `"datetimeEpoch"`).
    pub name: &'static str,
    /// The type every value stored in this field has.
    pub field_type: FieldType,
    pub(crate) get: fn(&R) -> FieldValue,
    pub(crate) set: fn(&mut R, FieldValue) -> Result<(), FieldValue>,
    pub(crate) copy: fn(&R, &mut R),
}

/// A fixed-schema weather record that can be addressed inside a collection and
/// accessed field by field.
///
/// The required items are generated by the `weather_record!` macro; everything else is
/// provided generically on top of [`Record::schema`].
///
/// # Examples
///
/// ```
/// use weather_timeline::{Day, FieldValue, Record};
///
/// let day = Day {
///     datetime: "2024-01-01".to_string(),
///     temp: 52.6,
///     tempmax: 58.1,
///     ..Default::default()
/// };
///
/// assert_eq!(day.get_field("temp").unwrap(), FieldValue::Float(52.6));
///
/// let cooler = day.with_field("temp", 50.0).unwrap();
/// assert_eq!(cooler.get_as::<f64>("temp").unwrap(), 50.0);
/// assert_eq!(day.temp, 52.6); // the original is untouched
///
/// let slim = day.project(&["tempmax"]);
/// assert_eq!(slim.datetime, "2024-01-01");
/// assert_eq!(slim.tempmax, 58.1);
/// assert_eq!(slim.temp, 0.0);
/// ```
pub trait Record: Clone + Default + 'static {
    /// Lowercase record name used in error messages (`"day"`, `"hour"`).
    const KIND: &'static str;

    /// The static field table of this record type, in declaration order.
    fn schema() -> &'static [FieldDescriptor<Self>];

    /// The identifying field: `datetime` for days and hours, `resolvedAddress` for the
    /// snapshot.
    fn key(&self) -> &str;

    fn set_key(&mut self, key: &str);

    /// Looks up the descriptor for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnknownField`] if `name` is not part of the schema.
    fn descriptor(name: &str) -> Result<&'static FieldDescriptor<Self>, AccessError> {
        Self::schema()
            .iter()
            .find(|descriptor| descriptor.name == name)
            .ok_or_else(|| AccessError::UnknownField {
                record: Self::KIND,
                field: name.to_string(),
            })
    }

    /// All field names of the schema, in declaration order.
    fn field_names() -> Vec<&'static str> {
        Self::schema()
            .iter()
            .map(|descriptor| descriptor.name)
            .collect()
    }

    /// The declared type of field `name`.
    fn field_type(name: &str) -> Result<FieldType, AccessError> {
        Ok(Self::descriptor(name)?.field_type)
    }

    /// Reads field `name`. The returned value carries its type tag, see
    /// [`FieldValue::field_type`].
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnknownField`] if `name` is not part of the schema.
    fn get_field(&self, name: &str) -> Result<FieldValue, AccessError> {
        let descriptor = Self::descriptor(name)?;
        Ok((descriptor.get)(self))
    }

    /// Reads field `name` as the concrete type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnknownField`] for unknown names and
    /// [`AccessError::TypeMismatch`] if `T` is not the field's declared type.
    fn get_as<T: FieldKind>(&self, name: &str) -> Result<T, AccessError> {
        let descriptor = Self::descriptor(name)?;
        T::from_value((descriptor.get)(self)).map_err(|_| AccessError::TypeMismatch {
            record: Self::KIND,
            field: name.to_string(),
            expected: descriptor.field_type,
            found: T::FIELD_TYPE,
        })
    }

    /// Returns a copy of this record with field `name` replaced by `value`.
    ///
    /// The value must carry exactly the field's declared type: an integer is not accepted
    /// for a float field and text is never parsed into a number. `self` is never modified;
    /// persisting the result is up to the caller (see [`crate::access::navigator`]).
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnknownField`] or [`AccessError::TypeMismatch`].
    fn with_field(&self, name: &str, value: impl Into<FieldValue>) -> Result<Self, AccessError> {
        let mut updated = self.clone();
        assign(&mut updated, name, value.into())?;
        Ok(updated)
    }

    /// Applies several field updates at once. Either every update is applied or the first
    /// failure is returned and nothing is.
    fn with_fields<I, N>(&self, updates: I) -> Result<Self, AccessError>
    where
        I: IntoIterator<Item = (N, FieldValue)>,
        N: AsRef<str>,
    {
        let mut updated = self.clone();
        for (name, value) in updates {
            assign(&mut updated, name.as_ref(), value)?;
        }
        Ok(updated)
    }

    /// Builds a record of the same type holding only the fields listed in `names`; all
    /// other fields are left at their zero value.
    ///
    /// Names that are not part of the schema are ignored, since the list is usually free
    /// text supplied by a user. The identifying field is always kept so the projected
    /// record can still be located. Projecting twice with the same list gives the same
    /// record as projecting once.
    fn project<S: AsRef<str>>(&self, names: &[S]) -> Self {
        let mut projected = Self::default();
        for name in names {
            if let Ok(descriptor) = Self::descriptor(name.as_ref()) {
                (descriptor.copy)(self, &mut projected);
            }
        }
        projected.set_key(self.key());
        projected
    }
}

fn assign<R: Record>(record: &mut R, name: &str, value: FieldValue) -> Result<(), AccessError> {
    let descriptor = R::descriptor(name)?;
    let found = value.field_type();
    let mismatch = || AccessError::TypeMismatch {
        record: R::KIND,
        field: name.to_string(),
        expected: descriptor.field_type,
        found,
    };
    if found != descriptor.field_type {
        return Err(mismatch());
    }
    (descriptor.set)(record, value).map_err(|_| mismatch())
}

/// Declares a weather record struct together with its [`Record`] implementation.
///
/// Every field is written as `"wireName" => rust_name: Type,`. The struct gets serde
/// support under the wire names, with missing or `null` JSON values decoding to the
/// field's zero value.
macro_rules! weather_record {
    (
        #[record(kind = $kind:literal, key = $key:ident)]
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $wire:literal => $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire, default, deserialize_with = "crate::types::null_as_default")]
                pub $field: $ty,
            )*
        }

        impl $crate::access::record::Record for $name {
            const KIND: &'static str = $kind;

            fn schema() -> &'static [$crate::access::record::FieldDescriptor<Self>] {
                static SCHEMA: &[$crate::access::record::FieldDescriptor<$name>] = &[
                    $(
                        $crate::access::record::FieldDescriptor {
                            name: $wire,
                            field_type: <$ty as $crate::access::field::FieldKind>::FIELD_TYPE,
                            get: |record| $crate::access::field::FieldKind::to_value(&record.$field),
                            set: |record, value| {
                                record.$field = $crate::access::field::FieldKind::from_value(value)?;
                                Ok(())
                            },
                            copy: |from, to| to.$field.clone_from(&from.$field),
                        },
                    )*
                ];
                SCHEMA
            }

            fn key(&self) -> &str {
                &self.$key
            }

            fn set_key(&mut self, key: &str) {
                self.$key = key.to_string();
            }
        }
    };
}

pub(crate) use weather_record;
