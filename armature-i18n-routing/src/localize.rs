//! Localized route tables
//!
//! Expands base route records into one record per locale, named and prefixed
//! the way [`RouteLocalizer`](crate::RouteLocalizer) expects to find them.

use crate::name::get_locale_route_name;
use crate::options::RoutingOptions;
use crate::prefix::{normalize_trailing_slash, prefix_path};
use crate::{RouteRecord, Strategy};

/// Generate the localized route table for `records`.
///
/// Under `prefix_and_default` the default locale gets an unprefixed record
/// (named with the default suffix) and a prefixed one named with the locale.
pub fn localize_routes(records: &[RouteRecord], options: &RoutingOptions) -> Vec<RouteRecord> {
    if options.strategy == Strategy::NoPrefix {
        return records.to_vec();
    }
    if options.locales.is_empty() {
        tracing::warn!("No locales configured, route table left unlocalized");
        return records.to_vec();
    }

    let mut localized = Vec::with_capacity(records.len() * (options.locales.len() + 1));

    for record in records {
        for locale in &options.locales {
            let prefixed = options.is_prefixable(locale);
            localized.push(localize_record(record, locale, prefixed, options));

            if options.strategy == Strategy::PrefixAndDefault && *locale == options.default_locale
            {
                let mut copy = localize_record(record, locale, true, options);
                copy.name = record.name.as_ref().map(|base| {
                    format!("{}{}{}", base, options.routes_name_separator, locale)
                });
                localized.push(copy);
            }
        }
    }

    tracing::debug!(
        base = records.len(),
        localized = localized.len(),
        strategy = %options.strategy,
        "Localized route table"
    );
    localized
}

fn localize_record(
    record: &RouteRecord,
    locale: &str,
    prefixed: bool,
    options: &RoutingOptions,
) -> RouteRecord {
    let localize_path = |path: &str| {
        if prefixed {
            normalize_trailing_slash(&prefix_path(locale, path), options.trailing_slash)
        } else {
            path.to_string()
        }
    };

    RouteRecord {
        name: record
            .name
            .as_ref()
            .map(|base| get_locale_route_name(base, locale, &options.name_options())),
        path: localize_path(&record.path),
        redirect: record.redirect.as_deref().map(localize_path),
        meta: record.meta.clone(),
    }
}
