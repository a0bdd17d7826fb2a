use crate::model::Entity;
use indexmap::IndexMap;

/// Groups entities by category. Categories keep first-seen order and each
/// group keeps input order, so output is stable across runs.
pub fn group_by_category(entities: &[Entity]) -> IndexMap<&str, Vec<&Entity>> {
    let mut groups: IndexMap<&str, Vec<&Entity>> = IndexMap::new();
    for entity in entities {
        groups.entry(entity.category.as_str()).or_default().push(entity);
    }
    groups
}
