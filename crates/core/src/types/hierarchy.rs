use crate::errors::CoreError;
use crate::types::descriptor::{Projection, TypeDescriptor};
use crate::types::names::{
    ANY_TYPE_NAME, BOX_TYPE_NAME, CHAR_SEQUENCE_TYPE_NAME, DOUBLE_TYPE_NAME, INT_TYPE_NAME, IN_BOX_TYPE_NAME,
    LIST_TYPE_NAME, LONG_TYPE_NAME, NUMBER_TYPE_NAME, OUT_BOX_TYPE_NAME, STRING_TYPE_NAME,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// Declared variance of a generic type parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    #[default]
    Invariant,
    /// `out T`: the parameter only appears in read positions
    Covariant,
    /// `in T`: the parameter only appears in write positions
    Contravariant,
}

impl Variance {
    /// Refine a declared variance with a use-site projection.
    ///
    /// Returns `None` when the projection conflicts with the declaration
    /// (`in` on a covariant parameter or `out` on a contravariant one); such
    /// an argument behaves like a star projection.
    pub fn refine(self, projection: Projection) -> Option<Variance> {
        match (self, projection) {
            (variance, Projection::None) => Some(variance),
            (Variance::Invariant, Projection::Out) | (Variance::Covariant, Projection::Out) => {
                Some(Variance::Covariant)
            }
            (Variance::Invariant, Projection::In) | (Variance::Contravariant, Projection::In) => {
                Some(Variance::Contravariant)
            }
            (Variance::Covariant, Projection::In) | (Variance::Contravariant, Projection::Out) => None,
        }
    }
}

/// What the hierarchy knows about one type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeInfo {
    /// Direct supertypes, by raw name
    pub supertypes: Vec<String>,
    /// Declared variance of each type parameter, in order
    pub parameters: Vec<Variance>,
}

/// Subtype lattice plus declared parameter variances.
///
/// Supertype edges carry no type arguments: a generic type's supertypes are
/// only consulted when the target is raw or the lattice root.
#[derive(Debug, Clone, Default)]
pub struct TypeHierarchy {
    types: HashMap<String, TypeInfo>,
}

impl TypeHierarchy {
    /// Hierarchy containing only the root type
    pub fn new() -> Self {
        let mut hierarchy = Self::default();
        hierarchy.types.insert(ANY_TYPE_NAME.to_string(), TypeInfo::default());
        hierarchy
    }

    /// Hierarchy of the numeric, text and holder types used by the demo beans
    pub fn standard() -> Self {
        let mut hierarchy = Self::new();
        hierarchy
            .declare(NUMBER_TYPE_NAME, &[ANY_TYPE_NAME])
            .declare(INT_TYPE_NAME, &[NUMBER_TYPE_NAME])
            .declare(LONG_TYPE_NAME, &[NUMBER_TYPE_NAME])
            .declare(DOUBLE_TYPE_NAME, &[NUMBER_TYPE_NAME])
            .declare(CHAR_SEQUENCE_TYPE_NAME, &[ANY_TYPE_NAME])
            .declare(STRING_TYPE_NAME, &[CHAR_SEQUENCE_TYPE_NAME])
            .declare_generic(OUT_BOX_TYPE_NAME, &[ANY_TYPE_NAME], &[Variance::Covariant])
            .declare_generic(IN_BOX_TYPE_NAME, &[ANY_TYPE_NAME], &[Variance::Contravariant])
            .declare_generic(BOX_TYPE_NAME, &[ANY_TYPE_NAME], &[Variance::Invariant])
            .declare_generic(LIST_TYPE_NAME, &[ANY_TYPE_NAME], &[Variance::Covariant]);
        hierarchy
    }

    /// Declare a non-generic type with its direct supertypes
    pub fn declare(&mut self, name: &str, supertypes: &[&str]) -> &mut Self {
        self.declare_generic(name, supertypes, &[])
    }

    /// Declare a generic type with its direct supertypes and parameter variances
    pub fn declare_generic(&mut self, name: &str, supertypes: &[&str], parameters: &[Variance]) -> &mut Self {
        self.types.insert(
            name.to_string(),
            TypeInfo {
                supertypes: supertypes.iter().map(|s| s.to_string()).collect(),
                parameters: parameters.to_vec(),
            },
        );
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&TypeInfo> {
        self.types.get(name)
    }

    /// Declared variance of parameter `index` of `name`; unknown parameters are invariant
    pub fn parameter_variance(&self, name: &str, index: usize) -> Variance {
        self.types
            .get(name)
            .and_then(|info| info.parameters.get(index))
            .copied()
            .unwrap_or_default()
    }

    /// Check that every name referenced by `descriptor` is declared
    pub fn validate(&self, descriptor: &TypeDescriptor) -> Result<(), CoreError> {
        match descriptor.referenced_names().into_iter().find(|name| !self.contains(name)) {
            Some(unknown) => Err(CoreError::unknown_type(unknown)),
            None => Ok(()),
        }
    }

    /// Whether `name` reaches `ancestor` through declared supertype edges
    pub fn extends(&self, name: &str, ancestor: &str) -> bool {
        if ancestor == ANY_TYPE_NAME {
            return true;
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([name]);

        while let Some(current) = queue.pop_front() {
            if current == ancestor {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(info) = self.types.get(current) {
                queue.extend(info.supertypes.iter().map(String::as_str));
            }
        }

        false
    }

    /// Whether a value of type `candidate` may be used where `target` is expected.
    ///
    /// An unresolved target accepts everything; an unresolved candidate is only
    /// accepted by an unresolved target. Type arguments are compared according
    /// to the declared variance of each parameter, refined by the target
    /// argument's use-site projection.
    pub fn is_assignable(&self, candidate: &TypeDescriptor, target: &TypeDescriptor) -> bool {
        let Some(target_name) = target.base_name() else {
            return true;
        };
        let Some(candidate_name) = candidate.base_name() else {
            return false;
        };

        if target_name == ANY_TYPE_NAME {
            return true;
        }

        if candidate_name != target_name {
            return !target.is_generic() && self.extends(candidate_name, target_name);
        }

        self.arguments_match(target_name, candidate.type_arguments(), target.type_arguments())
    }

    fn arguments_match(&self, name: &str, candidates: &[TypeDescriptor], targets: &[TypeDescriptor]) -> bool {
        // raw target
        if targets.is_empty() {
            return true;
        }
        if candidates.len() != targets.len() {
            return false;
        }

        candidates
            .iter()
            .zip(targets)
            .enumerate()
            .all(|(index, (candidate, target))| {
                if target.is_unresolved() {
                    return true;
                }

                let declared = self.parameter_variance(name, index);
                match declared.refine(target.projection()) {
                    None => {
                        tracing::warn!(
                            "Conflicting projection '{}' on parameter {} of {} treated as star",
                            target,
                            index,
                            name
                        );
                        true
                    }
                    Some(Variance::Covariant) => self.is_assignable(candidate, target),
                    Some(Variance::Contravariant) => self.is_assignable(target, candidate),
                    Some(Variance::Invariant) => {
                        self.is_assignable(candidate, target) && self.is_assignable(target, candidate)
                    }
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> TypeDescriptor {
        TypeDescriptor::named(name)
    }

    fn generic(name: &str, argument: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::generic(name, vec![argument])
    }

    #[test]
    fn test_variance_refinement() {
        assert_eq!(Variance::Invariant.refine(Projection::Out), Some(Variance::Covariant));
        assert_eq!(Variance::Invariant.refine(Projection::In), Some(Variance::Contravariant));
        assert_eq!(Variance::Covariant.refine(Projection::None), Some(Variance::Covariant));
        assert_eq!(Variance::Covariant.refine(Projection::Out), Some(Variance::Covariant));
        assert_eq!(Variance::Covariant.refine(Projection::In), None);
        assert_eq!(Variance::Contravariant.refine(Projection::Out), None);
    }

    #[test]
    fn test_simple_subtyping() {
        let hierarchy = TypeHierarchy::standard();

        assert!(hierarchy.is_assignable(&named(INT_TYPE_NAME), &named(NUMBER_TYPE_NAME)));
        assert!(hierarchy.is_assignable(&named(INT_TYPE_NAME), &named(ANY_TYPE_NAME)));
        assert!(hierarchy.is_assignable(&named(STRING_TYPE_NAME), &named(CHAR_SEQUENCE_TYPE_NAME)));
        assert!(!hierarchy.is_assignable(&named(NUMBER_TYPE_NAME), &named(INT_TYPE_NAME)));
        assert!(!hierarchy.is_assignable(&named(STRING_TYPE_NAME), &named(NUMBER_TYPE_NAME)));
        assert!(!hierarchy.is_assignable(&named(ANY_TYPE_NAME), &named(NUMBER_TYPE_NAME)));
    }

    #[test]
    fn test_covariant_holder() {
        let hierarchy = TypeHierarchy::standard();
        let target = generic(OUT_BOX_TYPE_NAME, named(NUMBER_TYPE_NAME));

        assert!(hierarchy.is_assignable(&generic(OUT_BOX_TYPE_NAME, named(INT_TYPE_NAME)), &target));
        assert!(hierarchy.is_assignable(&generic(OUT_BOX_TYPE_NAME, named(NUMBER_TYPE_NAME)), &target));
        assert!(!hierarchy.is_assignable(&generic(OUT_BOX_TYPE_NAME, named(STRING_TYPE_NAME)), &target));
        assert!(!hierarchy.is_assignable(&generic(IN_BOX_TYPE_NAME, named(INT_TYPE_NAME)), &target));
    }

    #[test]
    fn test_contravariant_holder() {
        let hierarchy = TypeHierarchy::standard();
        let target = generic(IN_BOX_TYPE_NAME, named(INT_TYPE_NAME));

        assert!(hierarchy.is_assignable(&generic(IN_BOX_TYPE_NAME, named(INT_TYPE_NAME)), &target));
        assert!(hierarchy.is_assignable(&generic(IN_BOX_TYPE_NAME, named(NUMBER_TYPE_NAME)), &target));
        assert!(!hierarchy.is_assignable(&generic(IN_BOX_TYPE_NAME, named(STRING_TYPE_NAME)), &target));

        let any_target = generic(IN_BOX_TYPE_NAME, named(ANY_TYPE_NAME));
        assert!(!hierarchy.is_assignable(&generic(IN_BOX_TYPE_NAME, named(NUMBER_TYPE_NAME)), &any_target));
    }

    #[test]
    fn test_invariant_holder_and_projections() {
        let hierarchy = TypeHierarchy::standard();
        let int_box = generic(BOX_TYPE_NAME, named(INT_TYPE_NAME));
        let number_box = generic(BOX_TYPE_NAME, named(NUMBER_TYPE_NAME));

        assert!(hierarchy.is_assignable(&int_box, &int_box));
        assert!(!hierarchy.is_assignable(&int_box, &number_box));
        assert!(!hierarchy.is_assignable(&number_box, &int_box));

        let out_number = generic(BOX_TYPE_NAME, named(NUMBER_TYPE_NAME).out_projected());
        assert!(hierarchy.is_assignable(&int_box, &out_number));

        let in_int = generic(BOX_TYPE_NAME, named(INT_TYPE_NAME).in_projected());
        assert!(hierarchy.is_assignable(&number_box, &in_int));
        assert!(!hierarchy.is_assignable(&generic(BOX_TYPE_NAME, named(STRING_TYPE_NAME)), &in_int));
    }

    #[test]
    fn test_unresolved_and_raw_targets() {
        let hierarchy = TypeHierarchy::standard();
        let int_out = generic(OUT_BOX_TYPE_NAME, named(INT_TYPE_NAME));

        assert!(hierarchy.is_assignable(&int_out, &TypeDescriptor::unresolved()));
        assert!(hierarchy.is_assignable(&int_out, &generic(OUT_BOX_TYPE_NAME, TypeDescriptor::unresolved())));
        assert!(hierarchy.is_assignable(&int_out, &named(OUT_BOX_TYPE_NAME)));
        assert!(!hierarchy.is_assignable(&TypeDescriptor::unresolved(), &named(INT_TYPE_NAME)));
    }

    #[test]
    fn test_conflicting_projection_behaves_like_star() {
        let hierarchy = TypeHierarchy::standard();
        let target = generic(OUT_BOX_TYPE_NAME, named(INT_TYPE_NAME).in_projected());

        assert!(hierarchy.is_assignable(&generic(OUT_BOX_TYPE_NAME, named(STRING_TYPE_NAME)), &target));
    }

    #[test]
    fn test_unknown_types() {
        let hierarchy = TypeHierarchy::standard();

        assert!(hierarchy.is_assignable(&named("Widget"), &named("Widget")));
        assert!(hierarchy.is_assignable(&named("Widget"), &named(ANY_TYPE_NAME)));
        assert!(!hierarchy.is_assignable(&named("Widget"), &named(NUMBER_TYPE_NAME)));

        let target = generic("Pair", named(NUMBER_TYPE_NAME));
        assert!(!hierarchy.is_assignable(&generic("Pair", named(INT_TYPE_NAME)), &target));

        assert!(matches!(
            hierarchy.validate(&generic(BOX_TYPE_NAME, named("Widget"))),
            Err(CoreError::UnknownType { type_name }) if type_name == "Widget"
        ));
        assert!(hierarchy.validate(&generic(BOX_TYPE_NAME, TypeDescriptor::unresolved())).is_ok());
    }

    #[test]
    fn test_cyclic_declarations_terminate() {
        let mut hierarchy = TypeHierarchy::new();
        hierarchy.declare("A", &["B"]).declare("B", &["A"]);

        assert!(hierarchy.extends("A", "B"));
        assert!(!hierarchy.extends("A", "C"));
    }
}
