//! Query and database name wrappers.

use crate::newtype_string::define_newtype_string;

define_newtype_string! {
    /// Name of a canned query: the stem of its `.sql` file.
    pub struct QueryName;
}

define_newtype_string! {
    /// Name of a host database, also the name of its query subdirectory.
    pub struct DatabaseName;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_query_name_rejects_empty() {
        assert!(QueryName::try_new("").is_none());
        assert!(QueryName::try_new("presidents").is_some());
    }

    #[test]
    fn test_query_name_borrow_lookup() {
        let mut map: HashMap<QueryName, i32> = HashMap::new();
        map.insert(QueryName::new("presidents"), 45);
        assert_eq!(map.get("presidents"), Some(&45));
    }

    #[test]
    fn test_database_name_derefs_to_str() {
        let db = DatabaseName::try_new("legislators").unwrap();
        assert_eq!(db.as_str(), "legislators");
        assert_eq!(db.len(), 11);
        assert_eq!(db.to_string(), "legislators");
    }

    #[test]
    fn test_query_name_serde_rejects_empty() {
        let name: QueryName = serde_json::from_str(r#""presidents""#).unwrap();
        assert_eq!(name.as_str(), "presidents");
        assert!(serde_json::from_str::<QueryName>(r#""""#).is_err());
    }
}
