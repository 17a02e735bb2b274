use crate::domain::model::RegistryModel;

/// Sorts services by id and every rule list, so that output depends only on
/// the content of the registry and not on its upstream ordering.
///
/// `String` ordering is a plain byte comparison, and `sort_by` is stable, so
/// services sharing an id keep their relative order.
pub fn normalize(model: &mut RegistryModel) {
    model
        .blocked_services
        .sort_by(|a, b| a.id.as_bytes().cmp(b.id.as_bytes()));

    for service in &mut model.blocked_services {
        service.rules.sort();
    }
}
