//! The per-model-type schema registry
//!
//! One `EnumRegistry` per model type definition, populated once at
//! declaration time and read-only afterwards. It indexes every declared
//! schema twice: by enumeration name (for attribute reads/writes) and by
//! raw column name (for predicate translation, where the query layer only
//! knows column names).

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::predicate::{translate_for_query, FilterArg};
use crate::schema::{EnumError, EnumResult, EnumSchema, Mapping, Options};
use crate::value::{EnumValue, SymbolInput};

use super::record::RawRecord;

/// Registry of enumerated attributes for one model type.
#[derive(Debug, Default)]
pub struct EnumRegistry {
    schemas: Vec<Arc<EnumSchema>>,
    by_name: HashMap<String, usize>,
    by_column: HashMap<String, usize>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an enumerated attribute and registers its schema.
    ///
    /// # Errors
    ///
    /// `Configuration` when the mapping itself is malformed (see
    /// [`EnumSchema::declare`]) or when the enumeration name or its raw
    /// column is already registered.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        mapping: Mapping,
        options: Options,
    ) -> EnumResult<Arc<EnumSchema>> {
        let schema = Arc::new(EnumSchema::declare(name, mapping, options)?);

        if self.by_name.contains_key(schema.name()) {
            return Err(EnumError::configuration(format!(
                "enumeration '{}' is already declared",
                schema.name()
            )));
        }
        if self.by_column.contains_key(schema.attribute()) {
            return Err(EnumError::configuration(format!(
                "column '{}' is already bound to an enumeration",
                schema.attribute()
            )));
        }

        debug!(
            enumeration = schema.name(),
            column = schema.attribute(),
            members = schema.members().len(),
            "declared enumerated attribute"
        );

        let index = self.schemas.len();
        self.by_name.insert(schema.name().to_string(), index);
        self.by_column.insert(schema.attribute().to_string(), index);
        self.schemas.push(Arc::clone(&schema));
        Ok(schema)
    }

    /// Looks up a schema by enumeration name.
    pub fn schema(&self, name: &str) -> Option<&Arc<EnumSchema>> {
        self.by_name.get(name).map(|&i| &self.schemas[i])
    }

    /// Looks up a schema by its raw column name.
    pub fn schema_for_column(&self, column: &str) -> Option<&Arc<EnumSchema>> {
        self.by_column.get(column).map(|&i| &self.schemas[i])
    }

    /// All registered schemas in declaration order.
    pub fn schemas(&self) -> impl Iterator<Item = &Arc<EnumSchema>> {
        self.schemas.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Reads the enumerated attribute `name` from `record`.
    ///
    /// Reads never validate: an out-of-band raw value yields a value whose
    /// accessors resolve to blank. Only an unknown enumeration name errors.
    pub fn read(&self, record: &dyn RawRecord, name: &str) -> EnumResult<EnumValue> {
        let schema = self.known(name)?;
        Ok(EnumValue::from_raw(
            schema,
            record.read_raw(schema.attribute()),
        ))
    }

    /// Writes the enumerated attribute `name` on `record`.
    ///
    /// The input is validated first; nothing is written on failure. A blank
    /// input (when allowed) clears the column.
    pub fn write(
        &self,
        record: &mut dyn RawRecord,
        name: &str,
        input: impl Into<SymbolInput>,
    ) -> EnumResult<EnumValue> {
        let schema = self.known(name)?;
        let value = EnumValue::from_symbol(schema, input)?;
        record.write_raw(schema.attribute(), value.raw_value().cloned());
        Ok(value)
    }

    /// Post-materialization hook: applies every `initial` symbol whose
    /// column is still blank, writing the symbol's raw counterpart.
    ///
    /// Idempotent; a second call finds the columns non-blank and does
    /// nothing. Unlike `default`, this mutates storage.
    pub fn materialize(&self, record: &mut dyn RawRecord) {
        for schema in &self.schemas {
            let Some(initial) = schema.initial_symbol() else {
                continue;
            };
            if record.read_raw(schema.attribute()).is_some() {
                continue;
            }
            // initial is member-checked at declaration time
            let raw = schema.raw_of(initial).cloned();
            debug!(
                enumeration = schema.name(),
                symbol = initial.as_str(),
                "applying initial value"
            );
            record.write_raw(schema.attribute(), raw);
        }
    }

    /// Translates a filter argument against the attribute `key`, which may
    /// be either an enumeration name or a raw column name. Arguments against
    /// non-enumerated attributes pass through unchanged.
    pub fn translate(&self, key: &str, arg: FilterArg) -> EnumResult<FilterArg> {
        match self.schema(key).or_else(|| self.schema_for_column(key)) {
            Some(schema) => translate_for_query(schema, arg),
            None => Ok(arg),
        }
    }

    fn known(&self, name: &str) -> EnumResult<&Arc<EnumSchema>> {
        self.schema(name)
            .ok_or_else(|| EnumError::configuration(format!("unknown enumeration '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RawValue, Sym};
    use std::collections::HashMap;

    /// Minimal in-memory record for registry tests.
    #[derive(Debug, Default)]
    struct Row {
        columns: HashMap<String, RawValue>,
    }

    impl RawRecord for Row {
        fn read_raw(&self, attribute: &str) -> Option<RawValue> {
            self.columns.get(attribute).cloned()
        }

        fn write_raw(&mut self, attribute: &str, value: Option<RawValue>) {
            match value {
                Some(v) => self.columns.insert(attribute.to_string(), v),
                None => self.columns.remove(attribute),
            };
        }
    }

    fn registry() -> EnumRegistry {
        let mut registry = EnumRegistry::new();
        registry
            .declare(
                "color",
                Mapping::explicit([
                    ("red", RawValue::from("Red color")),
                    ("green", RawValue::from(2)),
                    ("blue", RawValue::from(3)),
                ]),
                <Options as Default>::default().allow_blank(true),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_write_then_read() {
        let registry = registry();
        let mut row = Row::default();

        registry.write(&mut row, "color", Sym::new("green")).unwrap();
        assert_eq!(row.read_raw("color"), Some(RawValue::from("green")));

        let value = registry.read(&row, "color").unwrap();
        assert!(value.is(&Sym::new("green")));
    }

    #[test]
    fn test_invalid_write_leaves_record_untouched() {
        let registry = registry();
        let mut row = Row::default();
        row.write_raw("color", Some(RawValue::from("red")));

        let err = registry.write(&mut row, "color", Sym::new("beige")).unwrap_err();
        assert!(matches!(err, EnumError::InvalidSymbol { .. }));
        assert_eq!(row.read_raw("color"), Some(RawValue::from("red")));
    }

    #[test]
    fn test_blank_write_clears_the_column() {
        let registry = registry();
        let mut row = Row::default();
        registry.write(&mut row, "color", Sym::new("red")).unwrap();

        registry.write(&mut row, "color", SymbolInput::Blank).unwrap();
        assert_eq!(row.read_raw("color"), None);
    }

    #[test]
    fn test_unknown_enumeration_name() {
        let registry = registry();
        let row = Row::default();
        assert!(matches!(
            registry.read(&row, "shade"),
            Err(EnumError::Configuration(_))
        ));
    }

    #[test]
    fn test_duplicate_declaration_is_rejected() {
        let mut registry = registry();
        let result = registry.declare(
            "color",
            Mapping::sequence(["red"]),
            <Options as Default>::default(),
        );
        assert!(matches!(result, Err(EnumError::Configuration(_))));
    }

    #[test]
    fn test_column_collision_is_rejected() {
        let mut registry = registry();
        let result = registry.declare(
            "shade",
            Mapping::sequence(["light", "dark"]),
            <Options as Default>::default().attribute("color"),
        );
        assert!(matches!(result, Err(EnumError::Configuration(_))));
    }

    #[test]
    fn test_materialize_applies_initial_once() {
        let mut registry = EnumRegistry::new();
        registry
            .declare(
                "color",
                Mapping::explicit([
                    ("red", RawValue::from("Red color")),
                    ("green", RawValue::from(2)),
                ]),
                <Options as Default>::default().allow_blank(true).initial("red"),
            )
            .unwrap();

        let mut row = Row::default();
        registry.materialize(&mut row);
        assert_eq!(row.read_raw("color"), Some(RawValue::from("Red color")));

        // Does not clobber an existing value.
        row.write_raw("color", Some(RawValue::Int(2)));
        registry.materialize(&mut row);
        assert_eq!(row.read_raw("color"), Some(RawValue::Int(2)));
    }

    #[test]
    fn test_translate_by_name_and_column() {
        let mut registry = EnumRegistry::new();
        registry
            .declare(
                "color",
                Mapping::explicit([("red", RawValue::Int(1))]),
                <Options as Default>::default().attribute("hue"),
            )
            .unwrap();

        let by_name = registry
            .translate("color", FilterArg::symbol("red"))
            .unwrap();
        let by_column = registry.translate("hue", FilterArg::symbol("red")).unwrap();
        assert_eq!(by_name, FilterArg::Value(RawValue::Int(1)));
        assert_eq!(by_column, FilterArg::Value(RawValue::Int(1)));
    }

    #[test]
    fn test_translate_passes_through_unregistered_attributes() {
        let registry = registry();
        let arg = FilterArg::symbol("anything");
        assert_eq!(registry.translate("title", arg.clone()).unwrap(), arg);
    }
}
