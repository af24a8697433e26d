//! The plain `bundle` output format: build a bundle, then save it.

use crate::bundle::{Bundler, RequestOptions};
use crate::events::SaveLogger;
use crate::output::save::{SaveReport, save};
use crate::output::writer::FileWriter;
use crate::{Error, OutputOptions, Result};

/// Name an outer CLI uses to select this format.
pub const FORMAT_NAME: &str = "bundle";

/// Ask `bundler` for a bundle.
///
/// Module ids are always isolated, whatever the caller passed.
pub async fn build<B: Bundler>(bundler: &B, request: RequestOptions) -> Result<B::Output> {
    let request = RequestOptions {
        isolate_module_ids: true,
        ..request
    };

    bundler
        .build_bundle(request)
        .await
        .map_err(Error::BuildFailure)
}

/// Build and save in one step. A failed build writes nothing.
///
/// The request is built for the variant being saved: it takes `options.dev`,
/// and `options.platform` when one is set.
pub async fn build_and_save<B: Bundler>(
    bundler: &B,
    request: RequestOptions,
    options: &OutputOptions,
    writer: &dyn FileWriter,
    logger: &dyn SaveLogger,
) -> Result<SaveReport> {
    options.validate()?;

    let request = RequestOptions {
        dev: options.dev,
        platform: options.platform.clone().or(request.platform),
        ..request
    };
    let bundle = build(bundler, request).await?;
    save(&bundle, options, writer, logger).await
}
