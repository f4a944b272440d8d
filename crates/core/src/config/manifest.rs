use crate::errors::CoreError;
use crate::types::names::{
    CHAR_SEQUENCE_TYPE_NAME, DOUBLE_TYPE_NAME, INT_TYPE_NAME, LONG_TYPE_NAME, NUMBER_TYPE_NAME, STRING_TYPE_NAME,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Bean definitions loaded from YAML:
///
/// ```yaml
/// beans:
///   - name: intOutBox
///     holder: out
///     element: Int
///     value: 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeanManifest {
    #[serde(default)]
    pub beans: Vec<BeanSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeanSpec {
    pub name: String,
    pub holder: HolderKind,
    pub element: String,
    pub value: serde_yaml::Value,
}

/// Which holder wraps the bean value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolderKind {
    Out,
    In,
    Box,
}

/// Element types a manifest may name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Int,
    Long,
    Double,
    Number,
    String,
    CharSequence,
}

impl FromStr for ElementKind {
    type Err = CoreError;

    /// Accepts both the display spelling (`Int`) and the raw one (`i32`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Int" | INT_TYPE_NAME => Ok(ElementKind::Int),
            "Long" | LONG_TYPE_NAME => Ok(ElementKind::Long),
            "Double" | DOUBLE_TYPE_NAME => Ok(ElementKind::Double),
            NUMBER_TYPE_NAME => Ok(ElementKind::Number),
            STRING_TYPE_NAME => Ok(ElementKind::String),
            CHAR_SEQUENCE_TYPE_NAME => Ok(ElementKind::CharSequence),
            other => Err(CoreError::unknown_type(other)),
        }
    }
}

impl BeanManifest {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CoreError> {
        let manifest: BeanManifest = serde_yaml::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        tracing::debug!("Loading bean manifest from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Reject blank or repeated names before anything is registered
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = std::collections::HashSet::new();
        for spec in &self.beans {
            if spec.name.trim().is_empty() {
                return Err(CoreError::invalid_bean_definition(&spec.name, "bean name must not be empty"));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(CoreError::DuplicateBean {
                    name: spec.name.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.beans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }
}

impl BeanSpec {
    pub fn element_kind(&self) -> Result<ElementKind, CoreError> {
        self.element.parse()
    }

    /// Scalar value as text; YAML numbers and strings are both accepted
    pub fn value_text(&self) -> Result<String, CoreError> {
        match &self.value {
            serde_yaml::Value::String(text) => Ok(text.clone()),
            serde_yaml::Value::Number(number) => Ok(number.to_string()),
            serde_yaml::Value::Bool(flag) => Ok(flag.to_string()),
            _ => Err(CoreError::invalid_bean_definition(&self.name, "value must be a scalar")),
        }
    }

    /// Parse the value into the element type
    pub fn parse_value<T>(&self) -> Result<T, CoreError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let text = self.value_text()?;
        text.trim().parse::<T>().map_err(|error| {
            CoreError::invalid_bean_definition(&self.name, format!("cannot parse '{}' as {}: {}", text, self.element, error))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
beans:
  - name: intOutBox
    holder: out
    element: Int
    value: 10
  - name: numberInBox
    holder: in
    element: Number
    value: "2.5"
  - name: stringBox
    holder: box
    element: String
    value: box
"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = BeanManifest::from_yaml_str(MANIFEST).unwrap();

        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.beans[0].holder, HolderKind::Out);
        assert_eq!(manifest.beans[0].element_kind().unwrap(), ElementKind::Int);
        assert_eq!(manifest.beans[0].parse_value::<i32>().unwrap(), 10);
        assert_eq!(manifest.beans[1].holder, HolderKind::In);
        assert_eq!(manifest.beans[1].value_text().unwrap(), "2.5");
        assert_eq!(manifest.beans[2].holder, HolderKind::Box);
        assert_eq!(manifest.beans[2].parse_value::<String>().unwrap(), "box");
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = BeanManifest::from_yaml_str("beans: []").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_element_kinds() {
        assert_eq!("i64".parse::<ElementKind>().unwrap(), ElementKind::Long);
        assert_eq!("Double".parse::<ElementKind>().unwrap(), ElementKind::Double);
        assert_eq!("CharSequence".parse::<ElementKind>().unwrap(), ElementKind::CharSequence);

        let error = "Widget".parse::<ElementKind>().unwrap_err();
        assert!(matches!(error, CoreError::UnknownType { ref type_name } if type_name == "Widget"));
    }

    #[test]
    fn test_invalid_manifests() {
        let unknown_holder = "beans:\n  - {name: a, holder: list, element: Int, value: 1}";
        assert!(matches!(BeanManifest::from_yaml_str(unknown_holder), Err(CoreError::Yaml(_))));

        let duplicate = "beans:\n  - {name: a, holder: out, element: Int, value: 1}\n  - {name: a, holder: in, element: Int, value: 2}";
        assert!(matches!(BeanManifest::from_yaml_str(duplicate), Err(CoreError::DuplicateBean { .. })));

        let blank = "beans:\n  - {name: ' ', holder: out, element: Int, value: 1}";
        assert!(matches!(
            BeanManifest::from_yaml_str(blank),
            Err(CoreError::InvalidBeanDefinition { .. })
        ));
    }

    #[test]
    fn test_unparsable_value() {
        let manifest = BeanManifest::from_yaml_str("beans:\n  - {name: a, holder: out, element: Int, value: ten}").unwrap();
        let error = manifest.beans[0].parse_value::<i32>().unwrap_err();

        assert!(matches!(error, CoreError::InvalidBeanDefinition { ref name, .. } if name == "a"));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(BeanManifest::from_file("no-such-beans.yaml"), Err(CoreError::Io(_))));
    }
}
