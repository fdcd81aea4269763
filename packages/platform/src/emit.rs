use std::fmt::{Display, Formatter, Result as FmtResult};

use currencies::Asset;
use finance::fraction::Fraction;

use crate::object_id::ObjectId;

pub trait Emit
where
    Self: Sized,
{
    fn emit<K, V>(self, event_key: K, event_value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>;

    /// Specialization of [`emit`](Self::emit) for values implementing [`ToString`].
    fn emit_to_string_value<K, V>(self, event_key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        self.emit(event_key, value.to_string())
    }

    /// Specialization of [`emit`](Self::emit) for [`Asset`]-s.
    fn emit_asset<K>(self, event_key: K, asset: Asset) -> Self
    where
        K: Into<String>,
    {
        self.emit(event_key, asset.ticker())
    }

    fn emit_object_id<K>(self, event_key: K, id: &ObjectId) -> Self
    where
        K: Into<String>,
    {
        self.emit_to_string_value(event_key, id)
    }

    fn emit_fraction<K>(self, event_key: K, fraction: &Fraction) -> Self
    where
        K: Into<String>,
    {
        let key = event_key.into();
        let numerator_key = key.clone() + "-numerator";
        let denominator_key = key + "-denominator";

        self.emit_to_string_value(numerator_key, fraction.numerator())
            .emit_to_string_value(denominator_key, fraction.denominator())
    }
}

/// A typed record of what an operation did, in the order of its attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Event {
    ty: String,
    attributes: Vec<(String, String)>,
}

impl Event {
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find_map(|(attr_key, value)| (attr_key == key).then_some(value.as_str()))
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.ty)?;

        self.attributes
            .iter()
            .try_for_each(|(key, value)| write!(f, " {key}={value}"))
    }
}

#[must_use]
pub struct Emitter {
    event: Event,
}

impl Emitter {
    pub fn of_type<T>(event_type: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            event: Event {
                ty: event_type.into(),
                attributes: vec![],
            },
        }
    }
}

impl Emit for Emitter {
    fn emit<K, V>(mut self, event_key: K, event_value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.event.attributes.push((event_key.into(), event_value.into()));

        self
    }
}

impl From<Emitter> for Event {
    fn from(emitter: Emitter) -> Self {
        emitter.event
    }
}
