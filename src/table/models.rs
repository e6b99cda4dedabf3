use serde::ser::SerializeStruct;
use serde::Serialize;
use std::fmt;

/// Per-pair conversion for nonlinear categories: `(value, target unit) -> value in target`.
/// Returns the input unchanged when the target is the transform's own unit.
pub type Transform = fn(f64, &str) -> f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Ratio arithmetic through the base unit
    Linear,
    /// Affine per-pair formulas (temperature)
    Nonlinear,
}

#[derive(Clone, Copy)]
pub enum UnitSpec {
    /// Units of this unit per one base unit
    LinearFactor(f64),
    NonlinearTransform(Transform),
}

impl UnitSpec {
    pub fn kind(&self) -> CategoryKind {
        match self {
            UnitSpec::LinearFactor(_) => CategoryKind::Linear,
            UnitSpec::NonlinearTransform(_) => CategoryKind::Nonlinear,
        }
    }

    pub fn factor(&self) -> Option<f64> {
        match self {
            UnitSpec::LinearFactor(factor) => Some(*factor),
            UnitSpec::NonlinearTransform(_) => None,
        }
    }
}

impl fmt::Debug for UnitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSpec::LinearFactor(factor) => f.debug_tuple("LinearFactor").field(factor).finish(),
            UnitSpec::NonlinearTransform(_) => f.write_str("NonlinearTransform(..)"),
        }
    }
}

// Transforms have no data representation, so only linear factors are exported
impl Serialize for UnitSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            UnitSpec::LinearFactor(factor) => serializer.serialize_f64(*factor),
            UnitSpec::NonlinearTransform(_) => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitEntry {
    pub name: String,
    #[serde(rename = "factor")]
    pub spec: UnitSpec,
}

impl UnitEntry {
    pub fn linear(name: &str, factor: f64) -> Self {
        Self {
            name: name.to_string(),
            spec: UnitSpec::LinearFactor(factor),
        }
    }

    pub fn nonlinear(name: &str, transform: Transform) -> Self {
        Self {
            name: name.to_string(),
            spec: UnitSpec::NonlinearTransform(transform),
        }
    }

    /// Label shown in choice lists ("square-meter" -> "square meter")
    pub fn label(&self) -> String {
        self.name.replace('-', " ")
    }
}

#[derive(Debug, Clone)]
pub struct CategoryDefinition {
    pub key: String,
    pub aliases: Vec<String>,
    pub title: String,
    pub base_unit: String,
    pub kind: CategoryKind,
    // Declaration order is significant: it is the order of choice lists
    pub units: Vec<UnitEntry>,
}

impl CategoryDefinition {
    pub fn new(key: &str, title: &str, base_unit: &str, kind: CategoryKind) -> Self {
        Self {
            key: key.to_string(),
            aliases: Vec::new(),
            title: title.to_string(),
            base_unit: base_unit.to_string(),
            kind,
            units: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    pub fn with_unit(mut self, unit: UnitEntry) -> Self {
        self.units.push(unit);
        self
    }

    pub fn answers_to(&self, key: &str) -> bool {
        self.key == key || self.aliases.iter().any(|a| a == key)
    }

    pub fn unit(&self, name: &str) -> Option<&UnitSpec> {
        self.units.iter().find(|u| u.name == name).map(|u| &u.spec)
    }

    pub fn has_unit(&self, name: &str) -> bool {
        self.unit(name).is_some()
    }

    pub fn unit_names(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.name.as_str()).collect()
    }
}

impl Serialize for CategoryDefinition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("CategoryDefinition", 6)?;
        state.serialize_field("key", &self.key)?;
        if !self.aliases.is_empty() {
            state.serialize_field("aliases", &self.aliases)?;
        } else {
            state.skip_field("aliases")?;
        }
        state.serialize_field("title", &self.title)?;
        state.serialize_field("base", &self.base_unit)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("units", &self.units)?;
        state.end()
    }
}
