//! Definition catalogs and the registry that owns them.
//!
//! Seed data ships inside the crate as JSON. Runtime additions are appended;
//! nothing is ever removed.
use rand::Rng;
use std::sync::OnceLock;
use thiserror::Error;

use crate::config::ConfigIssue;
use crate::constants::MAX_ROWS;
use crate::fields::{FieldDefinition, FieldInput, TreeYield};
use crate::gems::GemName;
use crate::mines::{MineDefinition, MineInput};
use crate::outcome::{CellIdSource, Grid, generate_rows};
use crate::slug::slugify;

/// Embedded seed mines, as a JSON array of definitions.
pub const MINES_JSON: &str = include_str!("../data/mines.json");
/// Embedded seed fields, as a JSON array of definitions.
pub const FIELDS_JSON: &str = include_str!("../data/fields.json");

/// Errors raised while loading catalog seed data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {kind} catalog: {source}")]
    Parse {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Shared behavior of catalog entries (mines, fields).
pub trait Definition: Sized {
    /// Runtime request used by [`Catalog::add`].
    type Input;

    /// Noun used in log output.
    const KIND: &'static str;
    /// Id used when the display name slugifies to nothing.
    const FALLBACK_SLUG: &'static str;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn input_name(input: &Self::Input) -> &str;

    /// Build a definition from clamped input under an already-unique id.
    fn from_input(id: String, input: Self::Input) -> Self;

    fn validate(&self) -> Vec<ConfigIssue>;
}

/// Ordered, append-only list of definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    entries: Vec<T>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Definition> Catalog<T> {
    /// Wrap seed definitions, logging any configuration anomalies.
    #[must_use]
    pub fn new(entries: Vec<T>) -> Self {
        for entry in &entries {
            for issue in entry.validate() {
                log::warn!("[{}-config] {issue}", T::KIND);
            }
        }
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slug of `name`, suffixed `-1`, `-2`, … until no entry uses it.
    #[must_use]
    pub fn unique_id(&self, name: &str) -> String {
        let mut base = slugify(name);
        if base.is_empty() {
            base = T::FALLBACK_SLUG.to_string();
        }
        if !self.contains(&base) {
            return base;
        }
        let mut suffix: u64 = 1;
        loop {
            let candidate = format!("{base}-{suffix}");
            if !self.contains(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    /// Append a definition built from `input`, returning the stored entry.
    pub fn add(&mut self, input: T::Input) -> &T {
        let id = self.unique_id(T::input_name(&input));
        let definition = T::from_input(id, input);
        log::debug!("added {} '{}' ({})", T::KIND, definition.id(), definition.name());
        let index = self.entries.len();
        self.entries.push(definition);
        &self.entries[index]
    }
}

fn parse_catalog<T>(kind: &'static str, json: &str) -> Result<Vec<T>, CatalogError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json).map_err(|source| CatalogError::Parse { kind, source })
}

/// Mines shipped with the crate.
///
/// # Panics
///
/// Panics if the embedded mine data is malformed.
#[must_use]
pub fn static_mines() -> &'static [MineDefinition] {
    static MINES: OnceLock<Vec<MineDefinition>> = OnceLock::new();
    MINES.get_or_init(|| parse_catalog("mine", MINES_JSON).expect("valid embedded mine catalog"))
}

/// Fields shipped with the crate.
///
/// # Panics
///
/// Panics if the embedded field data is malformed.
#[must_use]
pub fn static_fields() -> &'static [FieldDefinition] {
    static FIELDS: OnceLock<Vec<FieldDefinition>> = OnceLock::new();
    FIELDS
        .get_or_init(|| parse_catalog("field", FIELDS_JSON).expect("valid embedded field catalog"))
}

/// Process-wide owner of the definition catalogs and the cell id counter.
#[derive(Debug, Clone)]
pub struct Registry {
    mines: Catalog<MineDefinition>,
    fields: Catalog<FieldDefinition>,
    cell_ids: CellIdSource,
}

impl Default for Registry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Registry {
    #[must_use]
    pub fn new(mines: Vec<MineDefinition>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            mines: Catalog::new(mines),
            fields: Catalog::new(fields),
            cell_ids: CellIdSource::new(),
        }
    }

    /// Registry seeded from the embedded catalogs.
    ///
    /// # Panics
    ///
    /// Panics if the embedded seed data is malformed.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(static_mines().to_vec(), static_fields().to_vec())
    }

    /// Registry seeded from caller-provided JSON arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if either document is not a valid definition list.
    pub fn from_json(mines_json: &str, fields_json: &str) -> Result<Self, CatalogError> {
        let mines = parse_catalog("mine", mines_json)?;
        let fields = parse_catalog("field", fields_json)?;
        Ok(Self::new(mines, fields))
    }

    #[must_use]
    pub const fn mines(&self) -> &Catalog<MineDefinition> {
        &self.mines
    }

    #[must_use]
    pub const fn fields(&self) -> &Catalog<FieldDefinition> {
        &self.fields
    }

    #[must_use]
    pub fn mine(&self, id: &str) -> Option<&MineDefinition> {
        self.mines.get(id)
    }

    #[must_use]
    pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.get(id)
    }

    pub fn add_mine(&mut self, input: MineInput) -> &MineDefinition {
        self.mines.add(input)
    }

    pub fn add_field(&mut self, input: FieldInput) -> &FieldDefinition {
        self.fields.add(input)
    }

    pub fn cell_ids(&mut self) -> &mut CellIdSource {
        &mut self.cell_ids
    }

    /// Populate a fresh grid for the mine `id`, or `None` if it is unknown.
    pub fn generate_mine<R: Rng>(&mut self, id: &str, rng: &mut R) -> Option<Grid<GemName>> {
        let mine = self.mines.get(id)?;
        let table = mine.outcome_table();
        let rows = mine.length.min(MAX_ROWS) as usize;
        log::debug!("generating {rows} rows for mine '{id}'");
        Some(generate_rows(&table, rows, &mut self.cell_ids, rng))
    }

    /// Populate a fresh grid for the field `id`, or `None` if it is unknown.
    pub fn generate_field<R: Rng>(&mut self, id: &str, rng: &mut R) -> Option<Grid<TreeYield>> {
        let field = self.fields.get(id)?;
        let table = field.outcome_table();
        let rows = field.length.min(MAX_ROWS) as usize;
        log::debug!("generating {rows} rows for field '{id}'");
        Some(generate_rows(&table, rows, &mut self.cell_ids, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn seeded_registry_has_static_content() {
        let registry = Registry::seeded();
        let mine_ids: Vec<_> = registry.mines().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(mine_ids, ["shallow", "balanced", "deep-crystal", "no-ruby"]);
        let field_ids: Vec<_> = registry.fields().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(field_ids, ["grove", "savannah", "highland"]);
        assert_eq!(registry.mine("balanced").map(|m| m.length), Some(200));
        assert!(registry.mine("no-ruby").is_some_and(|m| !m.gem_rates.contains_key(&GemName::Ruby)));
    }

    #[test]
    fn static_content_passes_validation() {
        for mine in static_mines() {
            assert!(mine.validate().is_empty(), "{} should validate", mine.id);
        }
        for field in static_fields() {
            assert!(field.validate().is_empty(), "{} should validate", field.id);
        }
    }

    #[test]
    fn unknown_ids_are_absent() {
        let mut registry = Registry::seeded();
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(registry.mine("atlantis").is_none());
        assert!(registry.generate_mine("atlantis", &mut rng).is_none());
        assert!(registry.generate_field("atlantis", &mut rng).is_none());
    }

    #[test]
    fn unique_id_suffixes_until_free() {
        let mut registry = Registry::seeded();
        let input = || MineInput {
            name: "Mine".into(),
            length: 10.0,
            ..MineInput::default()
        };
        assert_eq!(registry.add_mine(input()).id, "mine");
        assert_eq!(registry.add_mine(input()).id, "mine-1");
        assert_eq!(registry.add_mine(input()).id, "mine-2");
    }

    #[test]
    fn empty_slug_uses_fallback() {
        let mut registry = Registry::seeded();
        let field = registry.add_field(FieldInput {
            name: "???".into(),
            length: 4.0,
            fruit_chance: 0.5,
            description: None,
        });
        assert_eq!(field.id, "field");
        let mine = registry.add_mine(MineInput {
            name: String::new(),
            length: 4.0,
            ..MineInput::default()
        });
        assert_eq!(mine.id, "mine");
    }

    #[test]
    fn generated_grids_share_one_id_counter() {
        let mut registry = Registry::seeded();
        let mut rng = SmallRng::seed_from_u64(42);
        let mine = registry.generate_mine("shallow", &mut rng).unwrap();
        let field = registry.generate_field("grove", &mut rng).unwrap();
        assert_eq!(mine.row_count(), 150);
        assert_eq!(field.row_count(), 300);
        let max_mine = mine.cells().map(|c| c.id).max().unwrap();
        let min_field = field.cells().map(|c| c.id).min().unwrap();
        assert!(min_field > max_mine);
    }

    #[test]
    fn oversized_definitions_are_capped_at_max_rows() {
        let mut registry = Registry::from_json(
            r#"[{"id":"abyss","name":"Abyss","length":4000000000,"gem_rates":{}}]"#,
            "[]",
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(9);
        let grid = registry.generate_mine("abyss", &mut rng).unwrap();
        assert_eq!(grid.row_count(), MAX_ROWS as usize);

        let added = registry.add_mine(MineInput {
            name: "Bottomless".into(),
            length: 1e12,
            gem_rates: Vec::new(),
            description: None,
        });
        assert_eq!(added.length, MAX_ROWS);
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = Registry::from_json("[{]", "[]").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse mine catalog"));
        let ok = Registry::from_json("[]", "[]").unwrap();
        assert!(ok.mines().is_empty());
        assert!(ok.fields().is_empty());
    }
}
