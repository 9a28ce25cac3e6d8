//! Example assembling a `PROPFIND` multistatus body from rendered tags.
//!
//! Run with: `cargo run --package caltag-rfc --example multistatus_example`
//!
//! Set `CALTAG__XML__UNREGISTERED_NAMESPACE=reject` to see the strict policy
//! refuse the `CardDAV` property at the end.

use caltag_core::config::load_config;
use caltag_rfc::rfc::dav::build::{
    TagRenderer, href_tag, multistatus_close, multistatus_open, status_tag, tag, text_tag,
};
use caltag_rfc::rfc::dav::core::{QName, catalog};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let settings = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.logging.level))
        .init();

    let renderer = TagRenderer::from_settings(&settings)?;
    tracing::info!(policy = ?renderer.policy(), "Renderer ready");

    println!("=== Calendar collection ===\n");
    let collection = tag(
        &catalog::RESPONSE,
        &[
            href_tag("/calendars/alice/work/"),
            tag(
                &catalog::PROPSTAT,
                &[
                    tag(
                        &catalog::PROP,
                        &[
                            text_tag(&catalog::DISPLAY_NAME, "Work & Projects"),
                            tag(&catalog::GET_CTAG, "\"2026-10-19T09:00:00Z\""),
                            tag(
                                &catalog::RESOURCE_TYPE,
                                &[tag(&catalog::COLLECTION, ""), tag(&catalog::CALENDAR, "")]
                                    .concat(),
                            ),
                        ]
                        .concat(),
                    ),
                    status_tag(200),
                ]
                .concat(),
            ),
        ]
        .concat(),
    );
    println!(
        "{}",
        [multistatus_open(), collection, multistatus_close()].concat()
    );

    println!("\n=== Missing property ===\n");
    let missing = tag(
        &catalog::PROPSTAT,
        &[
            tag(&catalog::PROP, &tag(&catalog::CALENDAR_HOME_SET, "")),
            status_tag(404),
        ]
        .concat(),
    );
    println!("{missing}");

    println!("\n=== Property outside the registry ===\n");
    let address_data = QName::new("urn:ietf:params:xml:ns:carddav", "address-data");
    match renderer.render(&address_data, "") {
        Ok(xml) => println!("{xml}"),
        Err(e) => println!("refused: {e}"),
    }

    Ok(())
}
