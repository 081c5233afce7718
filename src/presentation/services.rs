//! Service list rendering.
//!
//! The services section is grouped under five fixed pillars. Each pillar's
//! heading comes from the bundle's `title_key` and its cards from the bundle's
//! `<key>_services` list. Pillars without entries produce no markup at all.

use crate::dom::{Document, SERVICES_CONTAINER_ID};
use crate::i18n::{LanguageBundle, RenderMetrics, ServiceEntry};
use askama::Template;
use tracing::{debug, error};

/// A fixed top-level category of the services section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePillar {
    /// Stable identifier, also the prefix of the bundle's services key
    pub key: &'static str,
    /// Bundle key of the pillar's display title
    pub title_key: &'static str,
}

impl ServicePillar {
    /// Bundle key of this pillar's service entries (e.g., "dev_services").
    pub fn services_key(&self) -> String {
        format!("{}_services", self.key)
    }
}

/// Pillars in display order.
pub const SERVICE_PILLARS: [ServicePillar; 5] = [
    ServicePillar { key: "dev", title_key: "service_pillar_dev" },
    ServicePillar { key: "infra", title_key: "service_pillar_infra" },
    ServicePillar { key: "security", title_key: "service_pillar_security" },
    ServicePillar { key: "comms", title_key: "service_pillar_comms" },
    ServicePillar { key: "support", title_key: "service_pillar_support" },
];

/// Result of a services render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServicesOutcome {
    Rendered { pillars: usize, cards: usize },
    MissingContainer,
    RenderFailed,
}

/// Services markup with the number of pillars and cards it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicesMarkup {
    pub html: String,
    pub pillars: usize,
    pub cards: usize,
}

#[derive(Template)]
#[template(path = "services.html")]
struct ServicesTemplate<'a> {
    pillars: Vec<PillarView<'a>>,
}

struct PillarView<'a> {
    title: &'a str,
    cards: &'a [ServiceEntry],
}

/// Build the full services markup for a bundle.
///
/// Titles and descriptions are HTML-escaped by the template.
pub fn render_services_markup(bundle: &LanguageBundle) -> askama::Result<ServicesMarkup> {
    let mut pillars = Vec::new();

    for pillar in SERVICE_PILLARS.iter() {
        let cards = bundle.services(&pillar.services_key());
        if cards.is_empty() {
            debug!("Skipping pillar '{}' with no services", pillar.key);
            continue;
        }

        let title = bundle.text(pillar.title_key).unwrap_or_else(|| {
            debug!("Missing pillar title '{}'", pillar.title_key);
            pillar.title_key
        });

        pillars.push(PillarView { title, cards });
    }

    let cards = pillars.iter().map(|pillar| pillar.cards.len()).sum();
    let pillar_count = pillars.len();
    let html = ServicesTemplate { pillars }.render()?;

    Ok(ServicesMarkup {
        html,
        pillars: pillar_count,
        cards,
    })
}

/// Render the services section of `bundle` into the document's container.
///
/// The container content is replaced in a single write. A missing container
/// or a template failure is logged and leaves the document untouched.
pub fn populate_services<D: Document>(
    doc: &mut D,
    bundle: &LanguageBundle,
    metrics: &mut RenderMetrics,
) -> ServicesOutcome {
    let Some(container) = doc.get_element_by_id(SERVICES_CONTAINER_ID) else {
        error!("Services container not found.");
        metrics.record_missing_container();
        return ServicesOutcome::MissingContainer;
    };

    let markup = match render_services_markup(bundle) {
        Ok(markup) => markup,
        Err(e) => {
            error!("Failed to render services: {}", e);
            return ServicesOutcome::RenderFailed;
        }
    };

    doc.set_inner_html(container, markup.html);
    metrics.record_service_render();

    debug!(
        "Rendered {} service pillars with {} cards",
        markup.pillars, markup.cards
    );
    ServicesOutcome::Rendered {
        pillars: markup.pillars,
        cards: markup.cards,
    }
}
