//! Tuple reconciliation: binding source elements to destination fields.
//!
//! Binding runs in three passes. Named destination fields first claim the
//! first unused source element with the same name, from any position. The
//! remaining fields then take unused unnamed source elements left to right,
//! falling back to the field's default once the source runs out. Finally,
//! every source element must have been consumed.
//!
//! For example, converting `(y: 4, x: 3)` to `(x: Int, y: Int)` binds `x` to
//! source element 1 and `y` to source element 0.

use std::fmt;

use ember_ast::TupleField;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Where a destination field gets its value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FieldBinding {
    /// The source element at this index.
    BoundTo(usize),
    /// The field's default value.
    UseDefault,
}

/// Why a source tuple cannot be reconciled with a destination tuple type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TupleMismatch {
    /// The source ran out before this destination field, which has no
    /// default.
    MissingElement { field: usize },
    /// This source element was not claimed by any destination field.
    ExtraElement { index: usize },
}

impl fmt::Display for TupleMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TupleMismatch::MissingElement { field } => {
                write!(f, "no value for tuple field #{}", field)
            }
            TupleMismatch::ExtraElement { index } => {
                write!(f, "tuple element #{} is not used", index)
            }
        }
    }
}

fn label(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}

/// Bind every destination field to a source element or to its default.
///
/// `source_names` lists the source elements in order with their optional
/// names. On success the result has one binding per destination field, and
/// every source element appears in exactly one `BoundTo`.
pub fn reconcile_tuple(
    source_names: &[Option<&str>],
    dest: &[TupleField],
) -> Result<Vec<FieldBinding>, TupleMismatch> {
    let mut used = vec![false; source_names.len()];
    let mut bindings: Vec<Option<FieldBinding>> = vec![None; dest.len()];

    // Pass 1: named fields claim same-named elements.
    let mut by_name: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
    for (index, name) in source_names.iter().enumerate() {
        if let Some(name) = label(*name) {
            by_name.entry(name).or_default().push(index);
        }
    }
    if !by_name.is_empty() {
        for (field_idx, field) in dest.iter().enumerate() {
            let Some(name) = field.label() else {
                continue;
            };
            let candidate = by_name
                .get(name)
                .and_then(|indices| indices.iter().copied().find(|&i| !used[i]));
            if let Some(index) = candidate {
                bindings[field_idx] = Some(FieldBinding::BoundTo(index));
                used[index] = true;
            }
        }
    }

    // Pass 2: remaining fields take unnamed elements in order, or defaults.
    let mut cursor = 0;
    for (field_idx, field) in dest.iter().enumerate() {
        if bindings[field_idx].is_some() {
            continue;
        }
        while cursor < source_names.len() && (used[cursor] || label(source_names[cursor]).is_some()) {
            cursor += 1;
        }
        if cursor == source_names.len() {
            if !field.has_default {
                return Err(TupleMismatch::MissingElement { field: field_idx });
            }
            bindings[field_idx] = Some(FieldBinding::UseDefault);
            continue;
        }
        bindings[field_idx] = Some(FieldBinding::BoundTo(cursor));
        used[cursor] = true;
        cursor += 1;
    }

    // Pass 3: extra elements are never dropped silently.
    if let Some(index) = used.iter().position(|u| !u) {
        return Err(TupleMismatch::ExtraElement { index });
    }

    Ok(bindings
        .into_iter()
        .map(|binding| match binding {
            Some(binding) => binding,
            None => unreachable!("destination field left unbound after pass 2"),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_ast::Ty;
    use FieldBinding::{BoundTo, UseDefault};

    fn named(name: &str) -> TupleField {
        TupleField::named(name, Ty::int())
    }

    fn unnamed() -> TupleField {
        TupleField::positional(Ty::int())
    }

    #[test]
    fn named_elements_are_permuted() {
        let bindings = reconcile_tuple(&[Some("y"), Some("x")], &[named("x"), named("y")]);
        assert_eq!(bindings, Ok(vec![BoundTo(1), BoundTo(0)]));
    }

    #[test]
    fn missing_trailing_field_uses_default() {
        let bindings = reconcile_tuple(&[None], &[named("a"), named("b").with_default()]);
        assert_eq!(bindings, Ok(vec![BoundTo(0), UseDefault]));
    }

    #[test]
    fn too_few_elements_without_defaults() {
        let result = reconcile_tuple(&[None, None], &[unnamed(), unnamed(), unnamed()]);
        assert_eq!(result, Err(TupleMismatch::MissingElement { field: 2 }));
    }

    #[test]
    fn too_many_elements() {
        let result = reconcile_tuple(&[None, None], &[unnamed()]);
        assert_eq!(result, Err(TupleMismatch::ExtraElement { index: 1 }));
    }

    #[test]
    fn named_element_never_fills_a_positional_field() {
        // `(z: 1)` cannot initialize `(Int)`: the only element is named and
        // no field has that name.
        let result = reconcile_tuple(&[Some("z")], &[unnamed()]);
        assert_eq!(result, Err(TupleMismatch::MissingElement { field: 0 }));
    }

    #[test]
    fn unmatched_named_field_falls_back_to_position() {
        let bindings = reconcile_tuple(&[None, Some("a")], &[named("a"), named("b")]);
        assert_eq!(bindings, Ok(vec![BoundTo(1), BoundTo(0)]));
    }

    #[test]
    fn duplicate_names_bind_left_to_right() {
        let bindings = reconcile_tuple(&[Some("a"), Some("a")], &[named("a"), named("a")]);
        assert_eq!(bindings, Ok(vec![BoundTo(0), BoundTo(1)]));
    }

    #[test]
    fn default_in_the_middle_is_skipped_only_when_source_is_exhausted() {
        let dest = [named("a"), named("b").with_default(), named("c")];
        // Two positional values fill `a` and `b`; `c` has nothing left.
        assert_eq!(
            reconcile_tuple(&[None, None], &dest),
            Err(TupleMismatch::MissingElement { field: 2 })
        );
        // Naming `c` lets `b` take its default.
        assert_eq!(
            reconcile_tuple(&[None, Some("c")], &dest),
            Ok(vec![BoundTo(0), UseDefault, BoundTo(1)])
        );
    }

    #[test]
    fn empty_names_count_as_unnamed() {
        let dest = [TupleField {
            name: Some(String::new()),
            ty: Ty::int(),
            has_default: false,
        }];
        assert_eq!(reconcile_tuple(&[Some("")], &dest), Ok(vec![BoundTo(0)]));
    }

    #[test]
    fn empty_tuples_reconcile_trivially() {
        assert_eq!(reconcile_tuple(&[], &[]), Ok(vec![]));
        assert_eq!(
            reconcile_tuple(&[], &[named("a").with_default()]),
            Ok(vec![UseDefault])
        );
    }

    #[test]
    fn bindings_serialize_by_variant() {
        let json = serde_json::to_string(&[BoundTo(1), UseDefault]).unwrap();
        assert_eq!(json, r#"[{"BoundTo":1},"UseDefault"]"#);
    }
}
