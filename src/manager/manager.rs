use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


/// A registry of named objects built from JSON.
///
/// `S` carries whatever an object needs to resolve its own references
/// (for instance the holiday tables a timetable points at).
pub trait IManager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    /// Rejects a second object under an existing name.
    fn insert(&self, name: &str, v: V) -> Result<(), ManagerError> {
        let mut map = self.map();
        match map.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(ManagerError::DuplicateNameError(name.to_owned())),
            Entry::Vacant(slot) => {
                debug!(name, "registered");
                slot.insert(v);
                Ok(())
            }
        }
    }

    fn insert_obj_from_json_vec(&self,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone(), supports)?;
        }
        Ok(())
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }
}

impl <V> IManager<V, ()> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            _supports: &()) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        self.insert(named_object.name(), v)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn label_from_json(json_value: serde_json::Value) -> Result<String, ManagerError> {
        let named: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value)?;
        Ok(named.name().to_uppercase())
    }

    #[test]
    fn objects_are_registered_by_name() {
        let manager = Manager::new(label_from_json);
        manager.insert_obj_from_json_vec(&[json!({"name": "a"}), json!({"name": "b"})], &()).unwrap();
        assert_eq!(manager.get("b").unwrap(), "B");
        assert_eq!(manager.names(), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn missing_name_is_reported() {
        let manager = Manager::new(label_from_json);
        let err = manager.get("nope").unwrap_err();
        assert!(matches!(err, ManagerError::NameNotFoundError(ref n) if n == "nope"));
        assert_eq!(err.to_string(), "key 'nope' not found");
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let manager = Manager::new(label_from_json);
        let err = manager
            .insert_obj_from_json_vec(&[json!({"name": "a"}), json!({"name": "a"})], &())
            .unwrap_err();
        assert!(matches!(err, ManagerError::DuplicateNameError(_)));
    }

    #[test]
    fn object_without_name_fails_to_parse() {
        let manager = Manager::new(label_from_json);
        let err = manager.insert_obj_from_json(json!({"title": "a"}), &()).unwrap_err();
        assert!(matches!(err, ManagerError::JsonParseError(_)));
    }
}
