use super::model::{Group, PropertyKind, Role, Series, VariantSeries};

/// Partition classified series into one [`Group`] per property.
///
/// Groups come out in order of first appearance. A later baseline replaces an
/// earlier one for the same property; variants accumulate in input order.
pub fn group<I>(entries: I) -> Vec<Group>
where
    I: IntoIterator<Item = (PropertyKind, Role, Series)>,
{
    let mut groups: Vec<Group> = Vec::new();

    for (kind, role, series) in entries {
        let idx = match groups.iter().position(|g| g.kind == kind) {
            Some(idx) => idx,
            None => {
                groups.push(Group::new(kind));
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];

        match role {
            Role::Baseline => {
                if group.baseline.replace(series).is_some() {
                    log::debug!("Replacing earlier WT series for {kind}");
                }
            }
            Role::Variant(label) => group.variants.push(VariantSeries { label, series }),
        }
    }

    groups
}
