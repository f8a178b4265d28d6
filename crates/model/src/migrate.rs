//! Field-by-field object migration
//!
//! Reconciles a raw object (provider payload or persisted record) against a
//! model's reference shape: the canonical set of fields with their defaults.
//! Fields the source provides are copied, fields it lacks keep their
//! defaults, and fields the reference does not know are dropped. Missing or
//! unknown fields are expected payload drift, not errors.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::de::kind;
use crate::error::ModelError;
use crate::media::MediaType;

const USER_DATA_KEY: &str = "userData";
const TYPE_KEY: &str = "type";

/// Copy every reference-shape field that `source` carries into `target`.
///
/// Mutates `target` in place. Infallible: fields absent from `source` keep
/// `target`'s current value, fields absent from `reference` are ignored.
pub fn migrate_object(
    target: &mut Map<String, Value>,
    source: &Map<String, Value>,
    reference: &Map<String, Value>,
) {
    for key in reference.keys() {
        if let Some(value) = source.get(key) {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// Build a model of type `T` from a raw object.
///
/// The reference shape is `T::default()` serialized to a map. After the
/// top-level migration two fixups run:
///
/// - When the raw object has no `userData` key, the `userData` sub-record is
///   migrated separately against the raw object's top level, so flattened
///   legacy records keep their user-edited fields.
/// - The `type` tag is forced to `media_type`, overriding whatever the raw
///   object claimed.
pub(crate) fn hydrate<T>(raw: &Value, media_type: MediaType) -> Result<T, ModelError>
where
    T: Default + Serialize + DeserializeOwned,
{
    let source = raw
        .as_object()
        .ok_or_else(|| ModelError::NotAnObject(kind(raw)))?;
    let reference = to_map(&T::default())?;

    let mut target = reference.clone();
    migrate_object(&mut target, source, &reference);

    if !source.contains_key(USER_DATA_KEY) {
        if let Some(Value::Object(user_reference)) = reference.get(USER_DATA_KEY) {
            let mut user_target = user_reference.clone();
            migrate_object(&mut user_target, source, user_reference);
            target.insert(USER_DATA_KEY.to_string(), Value::Object(user_target));
        }
    }

    target.insert(
        TYPE_KEY.to_string(),
        Value::String(media_type.as_str().to_string()),
    );

    from_map(target)
}

fn to_map<T: Serialize>(value: &T) -> Result<Map<String, Value>, ModelError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ModelError::NotAnObject(kind(&other))),
        Err(source) => Err(ModelError::Shape {
            path: "$".to_string(),
            source,
        }),
    }
}

fn from_map<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T, ModelError> {
    serde_path_to_error::deserialize(Value::Object(map)).map_err(|e| ModelError::Shape {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}
