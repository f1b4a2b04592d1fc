//! Hanging decoration rules: paintings, item frames and leash knots.

use super::Resolver;
use crate::config::Category;
use crate::event::{RemoveCause, Verdict};
use causeway_core::Entity;

/// Attribute a broken decoration to whoever last touched its cell
///
/// Passive causes (support block gone, unspecified) are ignored. A miss is
/// not suppressed: most player breaks never tag the decoration's cell.
pub(super) fn on_hanging_break(resolver: &Resolver, entity: &Entity, cause: RemoveCause) -> Verdict {
    if !resolver.enabled(Category::Hanging) || cause.is_passive() {
        return Verdict::Proceed;
    }
    let Some(pos) = entity.location.block_key() else {
        return Verdict::Proceed;
    };
    let Some(inherited) = resolver.store.lookup_location(&pos) else {
        return Verdict::Proceed;
    };

    let tag = inherited.relay(cause.key());
    match entity.kind.hanging_material() {
        Some(material) => resolver.audit.log_removal(&tag, pos, &material, None),
        None => resolver.audit.log_interaction(&tag, pos),
    }
    Verdict::Proceed
}
